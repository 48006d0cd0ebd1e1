//! System message rendering for the message list.

use eframe::egui;

use crate::i18n::Catalog;
use crate::node::{DefaultRenderers, Directory, Node};
use crate::render::{render, RenderContext};
use crate::system_message::SystemMessage;
use crate::ui::theme::{self, Theme};

/// Everything a system message row needs besides the message itself.
pub struct SystemMessageView<'a> {
    pub context: &'a RenderContext,
    pub catalog: &'a Catalog,
    pub directory: &'a dyn Directory,
    pub datetime_format: &'a str,
}

impl SystemMessageView<'_> {
    pub fn nodes(&self, message: &SystemMessage) -> Vec<Node> {
        let renderers = DefaultRenderers::new(self.directory, &self.context.origin)
            .with_datetime_format(self.datetime_format);
        render(message, self.context, self.catalog, &renderers)
    }
}

fn icon(message: &SystemMessage) -> &'static str {
    match message {
        SystemMessage::UserAdded { .. } | SystemMessage::UserJoined { .. } => "→",
        SystemMessage::UserRemove { .. }
        | SystemMessage::UserLeft { .. }
        | SystemMessage::UserKicked { .. }
        | SystemMessage::UserBanned { .. } => "←",
        SystemMessage::ChannelRenamed { .. }
        | SystemMessage::ChannelDescriptionChanged { .. }
        | SystemMessage::ChannelIconChanged { .. }
        | SystemMessage::ChannelOwnershipChanged { .. } => "✎",
        SystemMessage::MessagePinned { .. } | SystemMessage::MessageUnpinned { .. } => "📌",
        SystemMessage::CallStarted { .. } => "📞",
        SystemMessage::Text { .. } | SystemMessage::Unknown { .. } => "•",
    }
}

/// Render one system message as a compact row.
pub fn render_system_message(
    ui: &mut egui::Ui,
    view: &SystemMessageView<'_>,
    message: &SystemMessage,
    theme: &Theme,
) {
    let nodes = view.nodes(message);

    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(16.0);
        ui.label(egui::RichText::new(icon(message)).size(12.0).color(theme.text_muted));
        ui.add_space(8.0);
        render_nodes(ui, &nodes, theme);
    });
    ui.add_space(4.0);
}

/// Lay out a node list inline.
pub fn render_nodes(ui: &mut egui::Ui, nodes: &[Node], theme: &Theme) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                ui.label(egui::RichText::new(text).text_style(theme::system_message_style()).color(theme.text_muted));
            }
            Node::Strong(text) => {
                ui.label(
                    egui::RichText::new(text)
                        .text_style(theme::system_message_style())
                        .strong()
                        .color(theme.text_primary),
                );
            }
            Node::Mention { user_id, label } => {
                ui.label(
                    egui::RichText::new(format!("@{label}"))
                        .text_style(theme::system_message_style())
                        .strong()
                        .color(theme::name_color(user_id)),
                )
                .on_hover_text(user_id);
            }
            Node::Link { href, label } => {
                ui.hyperlink_to(egui::RichText::new(label).text_style(theme::system_message_style()).color(theme.info), href);
            }
            Node::Time { text, tooltip } => {
                ui.label(
                    egui::RichText::new(text)
                        .text_style(theme::system_message_style())
                        .underline()
                        .color(theme.text_secondary),
                )
                .on_hover_text(tooltip);
            }
        }
    }
}

/// Render a scrollable feed of system messages.
pub fn render_system_feed(
    ui: &mut egui::Ui,
    view: &SystemMessageView<'_>,
    messages: &[SystemMessage],
    theme: &Theme,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for message in messages {
                render_system_message(ui, view, message, theme);
            }
            ui.add_space(8.0);
        });
}
