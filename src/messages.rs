//! Chat lines for death-chest notifications.

use deathchest_world::{render_template, ChestNotification, MessageTemplates, TemplateVars};

/// Chat text for `note`, or `None` when the notification is silent.
///
/// `owner` is the chest owner, used when the notification itself does not
/// carry one (reclamation).
pub fn chat_line(
    templates: &MessageTemplates,
    note: &ChestNotification,
    owner: Option<&str>,
) -> Option<String> {
    match note {
        ChestNotification::ContainerCreated {
            position,
            owner_name,
        } => Some(render_template(
            &templates.container_created,
            &TemplateVars::new(owner_name, *position),
        )),
        ChestNotification::PlacementFailed {
            owner_name, origin, ..
        } => Some(render_template(
            &templates.no_site_found,
            &TemplateVars::new(owner_name, *origin),
        )),
        ChestNotification::ContainerReclaimed { position } => Some(render_template(
            &templates.container_removed,
            &TemplateVars {
                owner,
                pos: Some(*position),
            },
        )),
        ChestNotification::ContainerDiscovered { .. } => None,
    }
}
