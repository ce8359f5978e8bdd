//! This module defines the custom-furniture page: what the workshop builds,
//! how a commission works, and the inquiry form.
//!
//! The form keeps an [`InquiryState`] in a single `RwSignal`. A successful
//! submission shows a thank-you note and schedules a reset after
//! [`RESET_DELAY`]; the pending timeout is cleared when the page is torn down.

use leptos::{
    ev::{Event, SubmitEvent},
    logging,
    prelude::*,
};
use leptos_meta::Title;

use crate::{
    components::icons,
    inquiry::{Field, InquiryState, LogSink, RESET_DELAY, SubmissionTicket, SubmitOutcome},
    types::{OFFERINGS, PROCESS_STEPS},
};

const INPUT_CLASS: &str = "py-3 px-4 w-full placeholder-stone-500 text-stone-100 border border-stone-700 transition-shadow focus:ring-2 focus:outline-none bg-[#1c1917] focus:ring-[#c08a4b]";
const INPUT_INVALID_CLASS: &str = "py-3 px-4 w-full placeholder-stone-500 text-stone-100 border border-red-500 transition-shadow focus:ring-2 focus:outline-none bg-[#1c1917] focus:ring-red-500";

#[derive(Clone, Copy)]
struct FieldSpec {
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
}

const FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        field: Field::Name,
        label: "Name",
        placeholder: "Your full name",
        input_type: "text",
        autocomplete: "name",
    },
    FieldSpec {
        field: Field::Email,
        label: "Email",
        placeholder: "you@example.com",
        input_type: "email",
        autocomplete: "email",
    },
    FieldSpec {
        field: Field::Phone,
        label: "Phone",
        placeholder: "(555) 123-4567",
        input_type: "tel",
        autocomplete: "tel",
    },
    FieldSpec {
        field: Field::Requirements,
        label: "What would you like built?",
        placeholder: "Dimensions, materials, finish, timeline...",
        input_type: "text",
        autocomplete: "off",
    },
];

/// A scheduled callback that can be called off before it fires.
trait Cancel {
    fn cancel(self);
}

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Slot for the reset timeout that is still waiting to fire.
struct PendingReset<H> {
    handle: Option<H>,
}

impl<H: Cancel> PendingReset<H> {
    const fn new() -> Self {
        Self { handle: None }
    }

    /// Stores `handle`, cancelling any timeout it replaces.
    fn arm(&mut self, handle: H) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.cancel();
        }
    }

    fn take(&mut self) -> Option<H> {
        self.handle.take()
    }
}

/// Cancels the armed reset, if any. Runs when the page is torn down.
fn teardown<H: Cancel>(pending: &mut PendingReset<H>) {
    if let Some(handle) = pending.take() {
        handle.cancel();
    }
}

fn cancel_on_cleanup<H>(pending: StoredValue<PendingReset<H>>)
where
    H: Cancel + Send + Sync + 'static,
{
    on_cleanup(move || {
        pending.try_update_value(teardown);
    });
}

/// Arms the post-submission reset and remembers its handle for teardown.
fn schedule_reset(
    state: RwSignal<InquiryState>,
    pending: StoredValue<PendingReset<TimeoutHandle>>,
    ticket: SubmissionTicket,
) {
    let scheduled = set_timeout_with_handle(
        move || {
            pending.try_update_value(|pending| pending.take());
            state.try_update(|state| state.reset(ticket));
        },
        RESET_DELAY,
    );

    match scheduled {
        Ok(handle) => pending.update_value(|pending| pending.arm(handle)),
        Err(err) => logging::error!("Failed to schedule inquiry reset: {err:?}"),
    }
}

fn form_field(state: RwSignal<InquiryState>, spec: FieldSpec) -> impl IntoView {
    let field = spec.field;
    let id = field.id();
    let error_id = format!("{id}-error");
    let error = move || state.with(|state| state.errors.get(field));

    let value = move || state.with(|state| state.form.get(field).to_string());
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        state.update(|state| state.edit(field, value));
    };
    let input_class = move || {
        if error().is_some() {
            INPUT_INVALID_CLASS
        } else {
            INPUT_CLASS
        }
    };
    let invalid = move || if error().is_some() { "true" } else { "false" };

    let control = if field == Field::Requirements {
        view! {
            <textarea
                id=id
                name=id
                rows="6"
                placeholder=spec.placeholder
                autocomplete=spec.autocomplete
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                class=input_class
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=spec.input_type
                placeholder=spec.placeholder
                autocomplete=spec.autocomplete
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                class=input_class
            />
        }
        .into_any()
    };

    view! {
        <div class="flex flex-col gap-2">
            <label for=id class="text-sm font-semibold tracking-wide uppercase text-stone-300">
                {spec.label}
            </label>
            {control}
            <p
                id=error_id
                class=move || if error().is_some() { "text-sm text-red-400" } else { "hidden" }
            >
                {move || error().map(|err| err.to_string())}
            </p>
        </div>
    }
}

/// Renders the custom-furniture page and its inquiry form.
#[expect(clippy::too_many_lines)]
pub fn component() -> impl IntoView {
    let state = RwSignal::new(InquiryState::new());
    let pending_reset = StoredValue::new(PendingReset::<TimeoutHandle>::new());
    cancel_on_cleanup(pending_reset);

    let submitted = move || state.with(InquiryState::is_submitted);

    view! {
        <Title text="Custom Furniture \u{2013} Atelier"/>
        <div class="min-h-screen text-stone-100 bg-[#1c1917]">
            <section class="px-4 pt-12 pb-20 sm:px-6 lg:px-8">
                <div class="mx-auto max-w-5xl">
                    <h1 class="mb-6 text-5xl font-extrabold leading-tight sm:text-6xl text-[#c08a4b]">
                        "Furniture made"
                        <br/>
                        "for your room, not a catalogue"
                    </h1>
                    <p class="mb-6 max-w-2xl text-lg text-stone-300">
                        "Every piece we build starts with a conversation. Share what you have in mind and a designer will come back to you with sketches and a quote."
                    </p>
                    <a href="#inquiry" class="inline-flex items-center text-lg font-semibold hover:underline text-[#c08a4b]">
                        "Start your commission"
                    </a>
                </div>
            </section>

            <section class="py-16 px-4 sm:px-6 lg:px-8 bg-[#292524]">
                <div class="mx-auto max-w-5xl">
                    <h2 class="mb-10 text-3xl font-bold text-[#c08a4b]">"What we build"</h2>
                    <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
                        {OFFERINGS
                            .into_iter()
                            .map(|offering| {
                                view! {
                                    <div class="p-6 rounded-2xl border border-stone-700">
                                        <h3 class="mb-2 text-xl font-semibold">{offering.title}</h3>
                                        <p class="text-stone-300">{offering.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-16 px-4 sm:px-6 lg:px-8">
                <div class="mx-auto max-w-5xl">
                    <h2 class="mb-10 text-3xl font-bold text-[#c08a4b]">"How it works"</h2>
                    <ol class="grid grid-cols-1 gap-8 md:grid-cols-4">
                        {PROCESS_STEPS
                            .into_iter()
                            .enumerate()
                            .map(|(index, step)| {
                                view! {
                                    <li class="flex flex-col gap-2">
                                        <span class="text-4xl font-extrabold text-[#c08a4b]/60">
                                            {format!("{:02}", index + 1)}
                                        </span>
                                        <h3 class="text-lg font-semibold">{step.title}</h3>
                                        <p class="text-sm text-stone-300">{step.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <section id="inquiry" class="py-20 px-4 sm:px-6 lg:px-8 bg-[#292524]">
                <div class="mx-auto max-w-3xl">
                    <h2 class="mb-4 text-3xl font-bold text-[#c08a4b]">"Request a custom piece"</h2>
                    <p class="mb-6 text-stone-300">"Prefer to talk first? Reach us directly:"</p>
                    <div class="mb-10">{icons::component()}</div>
                    <form
                        class="space-y-6"
                        novalidate=true
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            if let Some(SubmitOutcome::Accepted(ticket)) =
                                state.try_update(|state| state.submit(&LogSink))
                            {
                                schedule_reset(state, pending_reset, ticket);
                            }
                        }
                    >
                        {FIELDS.into_iter().map(|spec| form_field(state, spec)).collect_view()}
                        <button
                            type="submit"
                            disabled=submitted
                            class="flex justify-center items-center py-3 px-6 w-full text-lg font-semibold transition-colors disabled:opacity-60 bg-[#c08a4b] text-[#1c1917] hover:bg-[#c08a4b]/90"
                        >
                            "Send inquiry"
                        </button>
                        <Show when=submitted>
                            <p role="status" class="text-[#c08a4b]">
                                "Thank you! A designer will contact you within two business days."
                            </p>
                        </Show>
                    </form>
                </div>
            </section>
        </div>
    }
}
