//! omikuji: terminal client for the omikuji topic-draw service
//! Draws a random discussion topic with the omikuji animation and manages
//! topics over the service's JSON API.

use anyhow::Result;
use clap::{Arg, ArgMatches, Command as ClapCommand};

use omikuji_cli::commands::auth::{
    handle_login_command, handle_logout_command, handle_register_command,
};
use omikuji_cli::commands::draw::handle_draw_command;
use omikuji_cli::commands::topics::{
    handle_delete_command, handle_list_command, handle_post_command,
};

fn cli() -> ClapCommand {
    ClapCommand::new("omikuji")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal client for the omikuji topic-draw service")
        .arg(
            Arg::new("server")
                .long("server")
                .value_name("URL")
                .global(true)
                .help("Base URL of the omikuji service (overrides OMIKUJI_SERVER and config.toml)"),
        )
        .subcommand(
            ClapCommand::new("draw")
                .about("Draw a random topic with the omikuji animation")
                .arg(
                    Arg::new("duration-ms")
                        .long("duration-ms")
                        .value_name("MS")
                        .help("Minimum display duration in milliseconds (default 3000)"),
                ),
        )
        .subcommand(ClapCommand::new("list").about("List topics"))
        .subcommand(
            ClapCommand::new("post")
                .about("Post a new topic (requires login)")
                .arg(Arg::new("title").required(true).help("Topic title"))
                .arg(
                    Arg::new("body-file")
                        .long("body-file")
                        .value_name("PATH")
                        .help("Read the topic body from a file instead of stdin"),
                ),
        )
        .subcommand(
            ClapCommand::new("delete")
                .about("Delete a topic (requires admin login)")
                .arg(Arg::new("id").required(true).help("Topic id")),
        )
        .subcommand(
            ClapCommand::new("login")
                .about("Log in to the service and store the session")
                .arg(Arg::new("username").help("Username (prompted when omitted)")),
        )
        .subcommand(
            ClapCommand::new("register")
                .about("Create an account on the service and store the session")
                .arg(Arg::new("username").help("Username (prompted when omitted)")),
        )
        .subcommand(ClapCommand::new("logout").about("Discard the stored session"))
}

fn server_flag(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("server").map(String::as_str)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("draw", sub)) => {
            let duration = sub.get_one::<String>("duration-ms").map(String::as_str);
            handle_draw_command(server_flag(sub), duration).await
        }
        Some(("list", sub)) => handle_list_command(server_flag(sub)).await,
        Some(("post", sub)) => {
            let title = sub
                .get_one::<String>("title")
                .expect("clap enforces the title argument");
            let body_file = sub
                .get_one::<String>("body-file")
                .map(std::path::Path::new);
            handle_post_command(server_flag(sub), title, body_file).await
        }
        Some(("delete", sub)) => {
            let id = sub
                .get_one::<String>("id")
                .expect("clap enforces the id argument");
            handle_delete_command(server_flag(sub), id).await
        }
        Some(("login", sub)) => {
            let username = sub.get_one::<String>("username").map(String::as_str);
            handle_login_command(server_flag(sub), username).await
        }
        Some(("register", sub)) => {
            let username = sub.get_one::<String>("username").map(String::as_str);
            handle_register_command(server_flag(sub), username).await
        }
        Some(("logout", _)) => handle_logout_command(),
        // No subcommand: drawing is what omikuji is for
        _ => handle_draw_command(server_flag(&matches), None).await,
    }
}
