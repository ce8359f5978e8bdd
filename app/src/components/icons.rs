use icondata::{BsChatDots, BsEnvelope, BsTelephone};
use leptos::{
    html::{a, div, span},
    prelude::*,
    svg::svg,
};

use crate::types::{CONTACT_CHANNELS, ChannelKind, ContactChannel};

fn channel_link(channel: ContactChannel) -> impl IntoView {
    let icon = match channel.kind {
        ChannelKind::Phone => BsTelephone,
        ChannelKind::Email => BsEnvelope,
        ChannelKind::Chat => BsChatDots,
    };
    let external = channel.is_external();

    a().href(channel.href)
        .target(external.then_some("_blank"))
        .rel(external.then_some("noopener noreferrer"))
        .aria_label(channel.label)
        .class("flex flex-row gap-2 items-center text-stone-200 transition-all duration-500 hover:text-[#c08a4b]")
        .child((
            svg()
                .attr("viewBox", icon.view_box)
                .attr("fill", "currentColor")
                .class("size-5")
                .inner_html(icon.data),
            span().class("text-sm").child(channel.label),
        ))
}

/// Renders the phone, email and chat links as a row of icons with labels.
pub fn component() -> impl IntoView {
    div()
        .class("flex flex-col gap-3 items-start md:flex-row md:gap-6 md:items-center")
        .child(CONTACT_CHANNELS.map(channel_link).into_iter().collect::<Vec<_>>())
}
