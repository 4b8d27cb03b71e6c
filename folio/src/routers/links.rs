use iced::Task;

use crate::app::AppEvent;
use crate::links::open_link;

/// Hand a link to the system; failures are logged and otherwise ignored.
pub(crate) fn open(uri: &str) -> Task<AppEvent> {
    match open_link(uri) {
        Ok(()) => log::debug!("opened {uri}"),
        Err(err) => log::warn!("{err}"),
    }
    Task::none()
}
