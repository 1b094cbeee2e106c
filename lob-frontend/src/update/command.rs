use std::path::PathBuf;

use crate::{action::Action, model::Model, task::Task};

#[tracing::instrument(skip(model))]
pub fn execute(cmd: &str, model: &mut Model) -> Vec<Action> {
    let cmd = cmd.trim();
    let (cmd, args) = match cmd.split_once(' ') {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (cmd, ""),
    };

    tracing::debug!("executing command: {:?} with args: {:?}", cmd, args);

    match (cmd, args) {
        ("", "") => Vec::new(),
        ("a" | "add", "") => {
            model.commandline = Some("Usage: add <path>...".to_owned());
            Vec::new()
        }
        ("a" | "add", args) => {
            let paths = args.split_whitespace().map(PathBuf::from).collect::<Vec<_>>();
            model.commandline = Some(format!("Loading {} path(s)", paths.len()));

            vec![Action::Task(Task::LoadCandidates(
                paths,
                model.settings.max_files,
            ))]
        }
        ("q" | "quit", "") => vec![Action::Quit],
        (cmd, args) => {
            let mut unknown = cmd.to_owned();
            if !args.is_empty() {
                unknown.push(' ');
                unknown.push_str(args);
            }

            model.commandline = Some(format!("Unknown command: {}", unknown));
            Vec::new()
        }
    }
}
