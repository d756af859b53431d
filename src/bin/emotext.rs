use clap::{Arg, ArgMatches, Command};
use std::io::Read;

use emotext::emotext::ast::Node;
use emotext::emotext::convert::EmoticonForm;
use emotext::emotext::parsing::parse;
use emotext::emotext::process::{OutputFormat, Pipeline, ProcessError};

fn main() {
    let matches = Command::new("emotext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse plain text and merge emoji and shortcodes into single nodes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a document and print the raw tree, without merging")
                .arg(
                    Arg::new("path")
                        .help("Input file, or '-' for standard input")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: tag, json, or yaml")
                        .default_value("tag"),
                ),
        )
        .subcommand(
            Command::new("merge")
                .about("Parse a document and merge emoji sequences and shortcodes")
                .arg(
                    Arg::new("path")
                        .help("Input file, or '-' for standard input")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: tag, json, or yaml")
                        .default_value("tag"),
                )
                .arg(
                    Arg::new("convert")
                        .long("convert")
                        .help("Rewrite merged emoticons: unicode or shortcode"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", sub_matches)) => handle_parse(sub_matches),
        Some(("merge", sub_matches)) => handle_merge(sub_matches),
        _ => unreachable!(),
    }
}

fn handle_parse(matches: &ArgMatches) {
    let source = read_source(matches);
    let format = resolve_format(matches);
    let tree = parse(&source);
    emit(format, &tree);
}

fn handle_merge(matches: &ArgMatches) {
    let source = read_source(matches);
    let format = resolve_format(matches);

    let mut pipeline = Pipeline::new();
    if let Some(name) = matches.get_one::<String>("convert") {
        let form = EmoticonForm::from_name(name).unwrap_or_else(|| {
            eprintln!("Error: {}", ProcessError::UnknownForm(name.clone()));
            std::process::exit(1);
        });
        pipeline = pipeline.convert_to(form);
    }

    let tree = pipeline.run(&source);
    emit(format, &tree);
}

fn read_source(matches: &ArgMatches) -> String {
    let path = matches.get_one::<String>("path").unwrap();
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|err| {
                eprintln!("Error reading standard input: {}", err);
                std::process::exit(1);
            });
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|err| {
            eprintln!("Error reading file '{}': {}", path, err);
            std::process::exit(1);
        })
    }
}

fn resolve_format(matches: &ArgMatches) -> OutputFormat {
    let name = matches.get_one::<String>("format").unwrap();
    OutputFormat::from_name(name).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    })
}

fn emit(format: OutputFormat, tree: &Node) {
    let output = format.render(tree).unwrap_or_else(|err| {
        eprintln!("Error rendering output: {}", err);
        std::process::exit(1);
    });
    print!("{}", output);
}
