//! Shell protocol implementation

use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use roster::core::Pool;
use roster::Engine;

/// Handle a shell command
pub fn handle_command(cmd: &str, engine: &mut Engine) -> Result<()> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(());
    }

    match parts[0] {
        "staff" => {
            ensure!(parts.len() >= 2, "staff command requires at least one id");
            engine.add_staff(&parts[1..], Pool::Regular)?;
        }
        "mainstaff" => {
            ensure!(parts.len() >= 2, "mainstaff command requires at least one id");
            engine.add_staff(&parts[1..], Pool::Main)?;
        }
        "teams" => {
            ensure!(parts.len() == 2, "teams command requires a count");
            let n = parts[1].parse().context("invalid team count")?;
            engine.set_teams(n);
        }
        "students" => {
            ensure!(parts.len() >= 2, "students command requires at least one id");
            engine.set_students(&parts[1..])?;
        }
        "seed" => {
            ensure!(parts.len() == 2, "seed command requires a value");
            let seed = parts[1].parse().context("invalid seed")?;
            engine.set_seed(seed);
        }
        "option" => {
            ensure!(parts.len() == 3, "option command requires a name and a value");
            engine.set_option(parts[1], parts[2])?;
        }
        "assign" => {
            let staff = engine.roster.len();
            let assignment = engine.assign()?;
            println!(
                "assigned {} items to {} staff (quota {}, {} extra)",
                assignment.len(),
                staff,
                assignment.len() / staff,
                assignment.len() % staff
            );
        }
        "show" => {
            let assignment = engine.assignment.as_ref().context("no assignment made yet")?;
            println!("{}", assignment);
        }
        "stats" => {
            let summary = engine.summary()?;
            println!("{}", summary);
        }
        "export" => {
            ensure!(parts.len() <= 2, "export command takes at most a path");
            let path = parts.get(1).map(Path::new);
            let written = engine.export(path)?;
            println!("exported to {}", written.display());
        }
        "reset" => {
            engine.reset();
        }
        "help" => {
            println!("staff <id>...       add staff to the regular pool");
            println!("mainstaff <id>...   add staff to the main pool");
            println!("teams <n>           load team numbers 1..=n");
            println!("students <id>...    load an explicit student roster");
            println!("seed <n>            seed the random source");
            println!("option <name> <v>   set strictmode or headers");
            println!("assign              run the allocation");
            println!("show                print the assignment per staff member");
            println!("stats               print distribution statistics");
            println!("export [path]       write the assignment as CSV");
            println!("reset               clear the session");
        }
        _ => bail!("unknown command: {}", parts[0]),
    }

    Ok(())
}
