use action::ActionResult;
use error::AppError;
use event::Emitter;
use lob_keymap::message::KeymapMessage;
use model::Model;
use settings::Settings;
use task::Task;
use terminal::TerminalWrapper;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
mod event;
mod layout;
mod model;
pub mod settings;
mod task;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start(&settings);

    if !settings.paths.is_empty() {
        emitter.run(Task::LoadCandidates(
            settings.paths.clone(),
            settings.max_files,
        ));
    }

    let help = get_help(emitter.bindings());
    let mut model = Model::new(settings, help);

    tracing::debug!("starting with model state: {:?}", model);

    let mut result = Vec::new();
    if let Err(error) = render_model(&mut terminal, &model) {
        result.push(error);
    }

    while let Some(envelope) = emitter.receiver.recv().await {
        tracing::trace!("received messages: {:?}", envelope.messages);

        let actions = update_model(&mut model, envelope);
        let exec = match action::exec(&mut emitter, &mut terminal, actions) {
            Ok(it) => it,
            Err(error) => {
                result.push(error);
                break;
            }
        };

        if exec == ActionResult::Quit {
            break;
        }

        if let Err(error) = render_model(&mut terminal, &model) {
            result.push(error);
            break;
        }
    }

    let results = lob_session::shutdown(&mut model.session);
    let actions = update::session::apply(&mut model, results);
    if let Err(error) = action::exec(&mut emitter, &mut terminal, actions) {
        result.push(error);
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    terminal.shutdown()?;

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}

fn get_help(bindings: &[(String, KeymapMessage)]) -> String {
    let mut entries: Vec<(String, Vec<&str>)> = Vec::new();
    for (key, message) in bindings {
        let label = message.to_string();
        match entries.iter_mut().find(|(known, _)| known == &label) {
            Some((_, keys)) => keys.push(key),
            None => entries.push((label, vec![key.as_str()])),
        }
    }

    entries
        .iter()
        .map(|(label, keys)| format!("{} {}", keys.join("/"), label))
        .collect::<Vec<_>>()
        .join("  ")
}
