use std::io::{self, BufRead};

use argtree::derive::Target;
use argtree::prelude::*;
use argtree::{tokenize, Arguments, CommandLine, StringArgument, SwitchArgument};

#[derive(Debug, Default, Target)]
struct StartupArgs {
    #[argtree(name = "List")]
    list: bool,
    #[argtree(name = "Help")]
    help: bool,
    #[argtree(name = "Create")]
    create: bool,
    #[argtree(name = "Delete")]
    delete: bool,
    #[argtree(name = "Filename")]
    filename: Option<String>,
    #[argtree(name = "Force")]
    force: bool,
    #[argtree(name = "ExtraContent")]
    extra_content: Vec<String>,
}

fn main() {
    let grammar = Arguments::new()
        .add(CommandLine::new("Help"))
        .add(
            CommandLine::new("List")
                .add(StringArgument::new("Path").with_default("./"))
                .with_elements_ignore_case(true),
        )
        .add(
            CommandLine::new("Create")
                .add(StringArgument::new("Filename"))
                .with_elements_ignore_case(true),
        )
        .add(
            CommandLine::new("Delete")
                .add(SwitchArgument::new("Force"))
                .add(StringArgument::new("Filename"))
                .with_elements_ignore_case(true),
        )
        .with_ignore_case(true);

    // Without Cli arguments, read a single command line from stdin instead.
    let matches = if std::env::args().len() > 1 {
        grammar.parse_env()
    } else {
        let mut line = String::default();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .expect("stdin must be readable");
        let tokens = tokenize(line.trim_end());
        grammar.parse(
            tokens
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    };

    let args: StartupArgs = grammar
        .to_object(&matches)
        .expect("StartupArgs must have a valid shape");

    if args.help {
        match args.extra_content.as_slice() {
            [command] => match command.to_uppercase().as_str() {
                "LIST" => println!("List the members of a directory: List [Path=./]"),
                "HELP" => println!("Show this help."),
                "CREATE" => println!("Create a file: Create Filename"),
                "DELETE" => println!("Delete a file: Delete [/Force] Filename"),
                _ => println!("Unknown command: {command}"),
            },
            _ => println!(
                "A file manager demo.\n    Supports the List, Help, Create and Delete commands; use 'Help COMMAND' for details."
            ),
        }
    } else if args.list {
        let path = grammar
            .find("Path")
            .and_then(|path| grammar.resolve(&matches, &path))
            .and_then(|value| value.as_text().map(str::to_string))
            .unwrap_or_default();
        println!("Would list the files and directories of '{path}'.");
    } else if args.create {
        match args.filename {
            Some(filename) => println!("Would create '{filename}'."),
            None => println!("A filename is required."),
        }
    } else if args.delete {
        match args.filename {
            Some(filename) if args.force => println!("Would delete '{filename}', without asking."),
            Some(filename) => println!("Would delete '{filename}'."),
            None => println!("A filename is required."),
        }
    } else {
        println!("No supported command given; use 'Help' to see the manual.");
    }

    if !args.extra_content.is_empty() && !args.help {
        println!("Ignored: {:?}", args.extra_content);
    }
}
