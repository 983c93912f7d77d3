use crate::cli::commands::open_gate;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Signup {
            email,
            password,
            confirm,
        } => {
            let (store, mut gate) = open_gate(cfg)?;
            let identity = gate.sign_up(&store, email, password, confirm)?;
            success(format!("Account created. Signed in as {}", identity.email));
            println!("User id: {}", identity.uid);
        }
        Commands::Login { email, password } => {
            let (store, mut gate) = open_gate(cfg)?;
            let identity = gate.sign_in(&store, email, password)?;
            success(format!("Welcome, {}!", identity.display_name()));
        }
        Commands::Logout => {
            let (store, mut gate) = open_gate(cfg)?;
            if gate.current().is_none() {
                info("Not signed in.");
            } else {
                gate.sign_out(&store)?;
                success("Signed out.");
            }
        }
        Commands::Whoami => {
            let (_, gate) = open_gate(cfg)?;
            let identity = gate.require()?;
            println!("{} ({})", identity.email, identity.uid);
        }
        _ => {}
    }

    Ok(())
}
