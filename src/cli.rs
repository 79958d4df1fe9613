extern crate clap;
extern crate compare_8xp;

use clap::{App, Arg, ErrorKind};
use compare_8xp::{compare_files, Comparison};
use std::path::Path;
use std::process::exit;

const USAGE: &str = "Usage: compare-8xp <file1.8xp> <file2.8xp>";

fn main() {
    env_logger::init();

    let parsed = App::new("8xp compare tool")
        .version("1.0")
        .about("Check whether two 8xp program binaries match, ignoring the embedded comment field")
        .arg(
            Arg::with_name("FILE1")
                .help("First program file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("FILE2")
                .help("Second program file")
                .required(true)
                .index(2),
        )
        .get_matches_safe();

    let matches = match parsed {
        Ok(matches) => matches,
        Err(err) => match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => err.exit(),
            _ => {
                println!("{}", USAGE);
                exit(2);
            }
        },
    };

    let result = match (matches.value_of("FILE1"), matches.value_of("FILE2")) {
        (Some(file_path_1), Some(file_path_2)) => {
            if !Path::new(file_path_1).exists() || !Path::new(file_path_2).exists() {
                println!("Both files must exist.");
                exit(2);
            }
            match compare_files(file_path_1, file_path_2) {
                Ok(result) => result,
                Err(err) => {
                    println!("Failed to read input files: {}", err);
                    exit(2);
                }
            }
        }
        _ => {
            println!("{}", USAGE);
            exit(2);
        }
    };

    println!("{}", result.comparison());
    match result.comparison() {
        Comparison::Match => exit(0),
        _ => {
            let (len1, len2) = result.lengths();
            println!("len1={} len2={}", len1, len2);
            exit(1);
        }
    }
}
