//! JSON command shell around the codec.
//!
//! `encode` reads command objects line by line from stdin, e.g.
//! `{"cmd":"on","temp":"23","mode":"auto","fan":"auto"}`, and prints the
//! pulse train for each. `decode` reads one captured train (a JSON array of
//! microsecond durations) and prints the recognized bits.

use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    Encode,
    Decode,
}

fn fail(error: &str) {
    println!(
        "{}",
        serde_json::json!({ "status": "fail", "error": error })
    );
}

mod encode {
    use std::io::{self, BufRead};
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};
    use wh_h07je::{pulses, Command, Fan, Mode, Settings};

    #[derive(Deserialize)]
    struct Request {
        cmd: String,
        temp: Option<String>,
        mode: Option<String>,
        fan: Option<String>,
        pure: Option<String>,
    }

    /// Per-command send counters, reported by the `stats` command.
    #[derive(Default, Serialize)]
    struct Stats {
        count: u64,
        hp: u64,
        off: u64,
        swing: u64,
        hipwr: u64,
        sleep: u64,
        vertical: u64,
        unknown: u64,
    }

    impl Stats {
        fn bump(&mut self, cmd: &str) {
            match cmd {
                "on" => self.hp += 1,
                "off" => self.off += 1,
                "swing" => self.swing += 1,
                "hipwr" => self.hipwr += 1,
                "sleep" => self.sleep += 1,
                "vertical" => self.vertical += 1,
                _ => self.unknown += 1,
            }
        }
    }

    fn build(cmd: &str, request: &Request) -> Result<Command, String> {
        match cmd {
            "on" => {
                let celsius = request
                    .temp
                    .as_deref()
                    .ok_or("missing temperature")?
                    .parse::<u8>()
                    .map_err(|_| "temperature out of range")?;
                let mode = Mode::from_str(request.mode.as_deref().ok_or("missing mode")?)
                    .map_err(|_| "invalid mode")?;
                let fan = Fan::from_str(request.fan.as_deref().ok_or("missing fan speed")?)
                    .map_err(|_| "invalid fan speed")?;
                let pure = request.pure.as_deref() == Some("on");
                let settings =
                    Settings::new(celsius, mode, fan, pure).map_err(|err| err.to_string())?;
                Ok(Command::Power(settings))
            }
            "off" => Ok(Command::Power(Settings::off())),
            "swing" => Ok(Command::Swing),
            "hipwr" => Ok(Command::HighPower),
            "sleep" => Ok(Command::Sleep),
            "vertical" => Ok(Command::UpDown),
            _ => Err("unknown command".to_string()),
        }
    }

    pub(super) fn main() {
        let mut stats = Stats::default();
        for line in io::stdin().lock().lines() {
            let line = line.unwrap();
            if line.trim().is_empty() {
                continue;
            }
            let request = match serde_json::from_str::<Request>(&line) {
                Ok(request) => request,
                Err(err) => {
                    super::fail(&err.to_string());
                    continue;
                }
            };
            match request.cmd.as_str() {
                "stats" => println!("{}", serde_json::to_string(&stats).unwrap()),
                cmd => match build(cmd, &request) {
                    Ok(command) => {
                        let train = pulses(&command.frame());
                        stats.bump(cmd);
                        println!(
                            "{}",
                            serde_json::json!({
                                "cmd": cmd,
                                "status": "ok",
                                "pulses": train
                                    .iter()
                                    .map(|bit| (bit.on, bit.off))
                                    .collect::<Vec<_>>(),
                            })
                        );
                    }
                    Err(error) => {
                        if error == "unknown command" {
                            stats.bump(cmd);
                        }
                        super::fail(&error);
                        continue;
                    }
                },
            }
            stats.count += 1;
        }
    }
}

mod decode {
    use std::io;

    pub(super) fn main() {
        let raw = serde_json::from_reader::<_, Vec<u16>>(io::stdin().lock()).unwrap();
        match wh_h07je::decode(&raw) {
            Ok(decoded) => println!(
                "{}",
                serde_json::json!({
                    "status": "ok",
                    "bits": decoded.bits,
                    "value": decoded.value,
                })
            ),
            Err(err) => super::fail(&err.to_string()),
        }
    }
}

fn main() {
    let opts = Opts::parse();

    match opts.command {
        Cmd::Encode => encode::main(),
        Cmd::Decode => decode::main(),
    }
}
