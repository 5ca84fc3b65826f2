extern crate clap;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader,BufRead,Read};
use std::process;
use std::str::FromStr;

use clap::{Arg, App, ArgMatches, SubCommand};
use log::{info,LevelFilter};
use serde::Serialize;
use simple_error::SimpleError;

use anagen::*;

#[derive(Serialize)]
struct SolveOutput<'a> {
    input: &'a str,
    solutions: Vec<&'a str>,
}

#[derive(Serialize)]
struct PuzzleOutput {
    text: String,
    real: bool,
}

#[derive(Serialize)]
struct GenerateOutput {
    word_size: usize,
    puzzles: Vec<PuzzleOutput>,
}

fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> Result<T, SimpleError> {
    let value = args.value_of(name).ok_or_else(|| SimpleError::new(format!("Missing value for --{}", name)))?;
    value.parse::<T>().map_err(|_| SimpleError::new(format!("Invalid value for --{}: {}", name, value)))
}

fn load_dictionary(args: &ArgMatches) -> Result<Dictionary, Box<dyn Error>> {
    let params = VocabParams::default().with_text_column(parse_arg::<u8>(args, "column")?);
    let mut dictionary = Dictionary::new();
    if let Some(filenames) = args.values_of("wordlist") {
        for filename in filenames {
            dictionary.read_wordlist(filename, &params)
                .map_err(|e| SimpleError::new(format!("Error reading word list {}: {}", filename, e)))?;
        }
    }
    Ok(dictionary)
}

fn output_solutions(input: &str, solutions: &[&str], json: bool, seqnr: usize) -> Result<(), Box<dyn Error>> {
    if json {
        if seqnr > 1 {
            println!(",");
        }
        print!("    {}", serde_json::to_string(&SolveOutput { input, solutions: solutions.to_vec() })?);
    } else {
        print!("{}", input);
        for solution in solutions {
            print!("\t{}", solution);
        }
        println!();
    }
    Ok(())
}

fn process_queries(dictionary: &Dictionary, inputstream: impl Read, json: bool, seqnr: &mut usize) -> Result<(), Box<dyn Error>> {
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        *seqnr += 1;
        let solutions: Vec<&str> = dictionary.solve(input).into_iter().collect();
        output_solutions(input, &solutions, json, *seqnr)?;
    }
    Ok(())
}

fn run_generate(dictionary: Dictionary, args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let word_size: usize = parse_arg(args, "length")?;
    let count: usize = parse_arg(args, "count")?;
    let count_fake: usize = parse_arg(args, "fakes")?;
    let mut generator = if args.is_present("seed") {
        AnagramGenerator::with_seed(dictionary, parse_arg(args, "seed")?)
    } else {
        AnagramGenerator::from_entropy(dictionary)
    };

    let anagrams = generator.generate_anagrams(word_size, count, count_fake)?;
    if args.is_present("json") {
        let output = GenerateOutput {
            word_size,
            puzzles: anagrams.into_iter().map(|text| {
                let real = !generator.solve(&text).is_empty();
                PuzzleOutput { text, real }
            }).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let reveal = args.is_present("reveal");
        for anagram in anagrams {
            if reveal {
                let kind = if generator.solve(&anagram).is_empty() { "FAKE" } else { "REAL" };
                println!("{}\t{}", anagram, kind);
            } else {
                println!("{}", anagram);
            }
        }
    }
    Ok(())
}

fn run_solve(dictionary: &Dictionary, args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let json = args.is_present("json");
    if json {
        println!("[");
    }
    let files: Vec<_> = if let Some(files) = args.values_of("files") {
        files.collect()
    } else {
        vec!("-")
    };
    let mut seqnr = 0;
    for filename in files {
        match filename {
            "-" | "STDIN" | "stdin"  => {
                info!("(accepting standard input; enter anagrams to solve, one per line)");
                process_queries(dictionary, io::stdin(), json, &mut seqnr)?;
            },
            _ =>  {
                let f = File::open(filename)
                    .map_err(|e| SimpleError::new(format!("Unable to open file {}: {}", filename, e)))?;
                process_queries(dictionary, f, json, &mut seqnr)?;
            }
        }
    }
    if json {
        println!();
        println!("]");
    }
    Ok(())
}

fn run_verify(dictionary: Dictionary, args: &ArgMatches) -> Result<bool, Box<dyn Error>> {
    let anagram: String = parse_arg(args, "anagram")?;
    let answer: String = parse_arg(args, "answer")?;
    let generator = AnagramGenerator::from_entropy(dictionary);
    let valid = generator.verify(&anagram, &answer);
    println!("{}", valid);
    Ok(valid)
}

fn run_index(dictionary: &Dictionary, args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let length: Option<usize> = if args.is_present("length") {
        Some(parse_arg(args, "length")?)
    } else {
        None
    };
    if let Some(length) = length {
        for key in dictionary.length_keys(length)? {
            let solutions: Vec<&str> = dictionary.solve(key).into_iter().collect();
            output_solutions(key, &solutions, false, 0)?;
        }
    } else {
        for node in dictionary.iter_anagrams() {
            print!("{}", node.key);
            for instance in node.instances.iter() {
                if let Some(vocabvalue) = dictionary.get_vocab(*instance) {
                    print!("\t{}", vocabvalue.text);
                }
            }
            println!();
        }
    }
    Ok(())
}

pub fn common_arguments<'a,'b>() -> Vec<clap::Arg<'a,'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("wordlist")
        .long("wordlist")
        .short("w")
        .help("Word list to draw puzzles from and solve against, one word per line (may be used multiple times)")
        .takes_value(true)
        .number_of_values(1)
        .multiple(true)
        .default_value("sowpods.txt"));
    args.push(Arg::with_name("column")
        .long("column")
        .help("Column (0-indexed) holding the word, for tab separated word lists")
        .takes_value(true)
        .default_value("0"));
    args
}

fn run(rootargs: &ArgMatches) -> Result<i32, Box<dyn Error>> {
    let (name, args) = rootargs.subcommand();
    let args = args.ok_or_else(|| SimpleError::new("No command specified, see --help"))?;

    info!("Loading dictionary...");
    let dictionary = load_dictionary(args)?;
    info!("Loaded {} words ({} anagrams)", dictionary.len(), dictionary.anagram_count());

    match name {
        "generate" => run_generate(dictionary, args)?,
        "solve" => run_solve(&dictionary, args)?,
        "verify" => {
            if !run_verify(dictionary, args)? {
                return Ok(1);
            }
        },
        "index" => run_index(&dictionary, args)?,
        _ => return Err(SimpleError::new(format!("Unknown command {}", name)).into()),
    }
    Ok(0)
}

fn main() {
    let rootargs = App::new("Anagen")
                    .version("0.1")
                    .about("Generates, solves and verifies anagram puzzles")
                    .subcommand(
                        SubCommand::with_name("generate")
                            .about("Generate a batch of anagram puzzles, some of which may be fake")
                            .args(&common_arguments())
                            .arg(Arg::with_name("length")
                                .long("length")
                                .short("l")
                                .help("Number of letters per puzzle")
                                .takes_value(true)
                                .default_value("5"))
                            .arg(Arg::with_name("count")
                                .long("count")
                                .short("n")
                                .help("Number of puzzles to generate")
                                .takes_value(true)
                                .default_value("10"))
                            .arg(Arg::with_name("fakes")
                                .long("fakes")
                                .short("f")
                                .help("How many of the puzzles should have no solution")
                                .takes_value(true)
                                .default_value("0"))
                            .arg(Arg::with_name("seed")
                                .long("seed")
                                .help("Seed for the random number generator, for reproducible batches")
                                .takes_value(true))
                            .arg(Arg::with_name("reveal")
                                .long("reveal")
                                .help("Mark each puzzle as REAL or FAKE"))
                            .arg(Arg::with_name("json")
                                .long("json")
                                .short("j")
                                .help("Output json instead of plain text"))
                    )
                    .subcommand(
                        SubCommand::with_name("solve")
                            .about("Find all words that can be formed from each input line")
                            .args(&common_arguments())
                            .arg(Arg::with_name("json")
                                .long("json")
                                .short("j")
                                .help("Output json instead of tsv"))
                            .arg(Arg::with_name("files")
                                .help("Input files (standard input if omitted)")
                                .takes_value(true)
                                .multiple(true)
                                .required(false))
                    )
                    .subcommand(
                        SubCommand::with_name("verify")
                            .about("Check whether an answer solves an anagram, exits with status 1 if not")
                            .args(&common_arguments())
                            .arg(Arg::with_name("anagram")
                                .help("The scrambled letters")
                                .required(true)
                                .index(1))
                            .arg(Arg::with_name("answer")
                                .help("The proposed solution")
                                .required(true)
                                .index(2))
                    )
                    .subcommand(
                        SubCommand::with_name("index")
                            .about("Output the anagram index")
                            .args(&common_arguments())
                            .arg(Arg::with_name("length")
                                .long("length")
                                .short("l")
                                .help("Only output anagrams of this length")
                                .takes_value(true))
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    let level = if rootargs.is_present("debug") { LevelFilter::Debug } else { LevelFilter::Info };
    simple_logging::log_to_stderr(level);

    match run(&rootargs) {
        Ok(status) => process::exit(status),
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(2);
        }
    }
}
