use contracts::currencies::CURRENCY_TABLE;
use contracts::rates::{self, ConversionError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::converter::api;
use crate::shared::components::ui::{Button, Input, Select};

const LOADING_MSG: &str = "Loading...";
const FAILURE_MSG: &str = "Conversion failed. Check your connection.";
const RATE_UNAVAILABLE_MSG: &str = "Rate unavailable.";

const FLAG_API_BASE: &str = "https://flagsapi.com";

/// Flag image for a currency code. An unknown code produces a URL with an
/// empty country segment and falls through to the browser's broken-image
/// rendering, which is all the original widget did.
fn flag_url(currency: &str) -> String {
    let country = CURRENCY_TABLE.country_code(currency).unwrap_or_default();
    format!("{}/{}/flat/64.png", FLAG_API_BASE, country)
}

/// "LKR" when the table has it, otherwise the first table entry.
fn default_target() -> &'static str {
    if CURRENCY_TABLE.contains("LKR") {
        "LKR"
    } else {
        CURRENCY_TABLE.codes().next().unwrap_or("USD")
    }
}

/// Exchange the selected pair. Applying this twice hands back the original
/// selection.
fn swapped(from: String, to: String) -> (String, String) {
    (to, from)
}

/// User-facing text for a failed conversion. Rate-unavailable is a calm,
/// distinct message; everything else is the generic connection failure.
fn error_message(err: &ConversionError) -> &'static str {
    match err {
        ConversionError::RateUnavailable { .. } => RATE_UNAVAILABLE_MSG,
        _ => FAILURE_MSG,
    }
}

/// Currency conversion widget.
///
/// All control state lives here as signals; the field values are the only
/// state carried between conversions. Each conversion is one fetch of the
/// source currency's rate document, a lookup, and a multiply.
#[component]
pub fn Converter() -> impl IntoView {
    let (amount, set_amount) = signal("1".to_string());
    let (source, set_source) = signal("USD".to_string());
    let (target, set_target) = signal(default_target().to_string());
    let (message, set_message) = signal(String::new());
    let (loading, set_loading) = signal(false);

    // Monotonic token per conversion. In-flight requests are never cancelled;
    // a completion whose token is stale writes nothing, so overlapping
    // conversions cannot overwrite a newer result.
    let request_seq = StoredValue::new(0u64);

    let convert = move || {
        let parsed = rates::parse_amount(&amount.get_untracked());
        if parsed.coerced {
            set_amount.set("1".to_string());
        }
        let from = source.get_untracked();
        let to = target.get_untracked();

        let token = request_seq.get_value() + 1;
        request_seq.set_value(token);

        set_loading.set(true);
        set_message.set(LOADING_MSG.to_string());

        spawn_local(async move {
            let outcome = api::fetch_rate(&from, &to).await;
            if request_seq.get_value() != token {
                // Superseded by a newer conversion.
                return;
            }
            set_loading.set(false);
            match outcome {
                Ok(rate) => {
                    let converted = rates::convert(parsed.value, rate);
                    set_message.set(rates::format_result_line(
                        parsed.value,
                        &from,
                        converted,
                        &to,
                    ));
                }
                Err(err) => {
                    if !matches!(err, ConversionError::RateUnavailable { .. }) {
                        log::error!("conversion failed: {}", err);
                    }
                    set_message.set(error_message(&err).to_string());
                }
            }
        });
    };

    // One conversion with the default pair as soon as the widget mounts.
    Effect::new(move |_| {
        convert();
    });

    let swap = move |_| {
        let (new_source, new_target) = swapped(source.get_untracked(), target.get_untracked());
        set_source.set(new_source);
        set_target.set(new_target);
        convert();
    };

    view! {
        <form
            class="converter"
            on:submit=move |ev| {
                ev.prevent_default();
                convert();
            }
        >
            <h1 class="converter__title">"Currency Converter"</h1>

            <Input
                label="Enter Amount"
                value=amount
                on_input=Callback::new(move |v| set_amount.set(v))
                id="amount-input"
            />

            <div class="converter__pair">
                <CurrencyField
                    label="From"
                    code=source
                    on_change=Callback::new(move |v| set_source.set(v))
                />
                <button
                    type="button"
                    class="converter__swap"
                    title="Swap currencies"
                    on:click=swap
                >
                    "\u{21C5}"
                </button>
                <CurrencyField
                    label="To"
                    code=target
                    on_change=Callback::new(move |v| set_target.set(v))
                />
            </div>

            <p
                class="converter__message"
                class=("converter__message--loading", move || loading.get())
            >
                {move || message.get()}
            </p>

            <Button button_type="submit">"Get Exchange Rate"</Button>
        </form>
    }
}

/// One side of the currency pair: flag image plus selector, flag always
/// following the current selection.
#[component]
fn CurrencyField(
    #[prop(into)] label: String,
    #[prop(into)] code: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let options: Vec<(String, String)> = CURRENCY_TABLE
        .codes()
        .map(|c| (c.to_string(), c.to_string()))
        .collect();

    view! {
        <div class="currency-field">
            <img
                class="currency-field__flag"
                src=move || flag_url(&code.get())
                alt=move || {
                    CURRENCY_TABLE
                        .country_code(&code.get())
                        .unwrap_or_default()
                        .to_string()
                }
            />
            <Select label=label value=code options=options on_change=on_change />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_urls_resolve_from_the_table() {
        assert_eq!(flag_url("USD"), "https://flagsapi.com/US/flat/64.png");
        assert_eq!(flag_url("LKR"), "https://flagsapi.com/LK/flat/64.png");
        // Unknown code keeps the original widget's broken-image behavior.
        assert_eq!(flag_url("???"), "https://flagsapi.com//flat/64.png");
    }

    #[test]
    fn default_target_prefers_lkr() {
        assert_eq!(default_target(), "LKR");
    }

    #[test]
    fn swapping_twice_restores_the_pair() {
        let once = swapped("USD".to_string(), "LKR".to_string());
        assert_eq!(once, ("LKR".to_string(), "USD".to_string()));
        let twice = swapped(once.0, once.1);
        assert_eq!(twice, ("USD".to_string(), "LKR".to_string()));
    }

    #[test]
    fn error_messages_stay_distinct() {
        let network = ConversionError::Network {
            detail: "HTTP 502".into(),
        };
        let malformed = ConversionError::MalformedResponse {
            detail: "not json".into(),
        };
        let unavailable = ConversionError::RateUnavailable {
            base: "USD".into(),
            target: "XYZ".into(),
        };
        assert_eq!(error_message(&network), FAILURE_MSG);
        assert_eq!(error_message(&malformed), FAILURE_MSG);
        assert_eq!(error_message(&unavailable), RATE_UNAVAILABLE_MSG);
    }
}
