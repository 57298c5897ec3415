use std::path::{Path, PathBuf};

use mandato::compiler;
use mandato::server::{self, AppState};
use mandato::shell::{Shell, ShellCommand, ShellInput};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_OUTPUT_DIR: &str = "output";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("serve") => run_server(&args[1..]),
        Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some(other) if other.starts_with('-') => {
            eprintln!("unknown option: {}", other);
            print_usage();
            std::process::exit(2);
        }
        // Any other args are treated as a one-shot instruction.
        Some(_) => {
            let instruction = args.join(" ");
            let c = compiler::compile(&instruction);
            print!("{}", c.domain);
            println!();
            print!("{}", c.problem);
            Ok(())
        }
        None => run_repl(),
    }
}

fn print_usage() {
    println!("mandato — compile task instructions into planning documents");
    println!();
    println!("USAGE:");
    println!("  mandato                          interactive shell");
    println!("  mandato <instruction text>       compile once and print");
    println!("  mandato serve [--port N] [--output DIR] [--solver URL]");
}

// ---------------------------------------------------------------------------
// serve subcommand
// ---------------------------------------------------------------------------

fn run_server(args: &[String]) -> anyhow::Result<()> {
    let mut port = DEFAULT_PORT;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut solver_url = server::DEFAULT_SOLVER_URL.to_string();

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--port" => {
                let value = it.next().ok_or_else(|| anyhow::anyhow!("--port needs a value"))?;
                port = value.parse()?;
            }
            "--output" => {
                let value = it.next().ok_or_else(|| anyhow::anyhow!("--output needs a value"))?;
                output_dir = PathBuf::from(value);
            }
            "--solver" => {
                let value = it.next().ok_or_else(|| anyhow::anyhow!("--solver needs a value"))?;
                solver_url = value.clone();
            }
            other => anyhow::bail!("unknown serve option: {}", other),
        }
    }

    let state = AppState::new(output_dir, solver_url);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(state, port))
}

// ---------------------------------------------------------------------------
// Interactive shell
// ---------------------------------------------------------------------------

fn run_repl() -> anyhow::Result<()> {
    println!("mandato — instruction compiler");
    println!("Type an instruction (Spanish or English), :help for commands.");
    println!();

    let mut shell = Shell::new();
    let output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut last: Option<compiler::Compilation> = None;

    loop {
        let instruction = match shell.next_input() {
            ShellInput::Eof | ShellInput::Command(ShellCommand::Quit) => break,
            ShellInput::Empty | ShellInput::Interrupted => continue,
            ShellInput::Command(ShellCommand::Help) => {
                println!("  <text>      compile an instruction and print both documents");
                println!("  :json       re-print the last compilation as JSON");
                println!("  :quit       leave the shell");
                continue;
            }
            ShellInput::Command(ShellCommand::Json) => {
                match &last {
                    Some(c) => match serde_json::to_string_pretty(c) {
                        Ok(json) => println!("{}", json),
                        Err(e) => eprintln!("WARN: could not serialize: {}", e),
                    },
                    None => println!("compile an instruction first"),
                }
                continue;
            }
            ShellInput::Command(ShellCommand::Unknown(name)) => {
                println!("unknown command :{} (try :help)", name);
                continue;
            }
            ShellInput::Instruction(text) => text,
        };

        let c = compiler::compile(&instruction);
        println!("{}", compiler::summarize(&c));
        println!();
        print!("{}", c.domain);
        println!();
        print!("{}", c.problem);

        // Keep the latest pair on disk, same layout the service uses.
        if let Err(e) = persist(&output_dir, &c) {
            eprintln!("WARN: could not write {}: {}", output_dir.display(), e);
        } else {
            println!();
            println!(
                "wrote {}/domain.pddl and {}/problem.pddl",
                output_dir.display(),
                output_dir.display()
            );
        }
        last = Some(c);
    }

    Ok(())
}

fn persist(dir: &Path, c: &compiler::Compilation) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join("domain.pddl"), &c.domain)?;
    std::fs::write(dir.join("problem.pddl"), &c.problem)?;
    Ok(())
}
