use studyhub_core::config::QuoteConfig;
use studyhub_core::quotes::QuoteDeck;
use yew::{Callback, Html, Properties, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct QuoteRotatorProps {
    pub config: QuoteConfig,
}

fn draw(deck: &QuoteDeck) -> String {
    deck.random(&mut rand::thread_rng())
        .map(str::to_string)
        .unwrap_or_default()
}

#[function_component(QuoteRotator)]
pub fn quote_rotator(props: &QuoteRotatorProps) -> Html {
    let deck = {
        let config = props.config.clone();
        use_state(move || QuoteDeck::new(&config))
    };
    let quote = {
        let deck = deck.clone();
        use_state(move || draw(&deck))
    };

    let on_new_quote = {
        let quote = quote.clone();
        Callback::from(move |_| quote.set(draw(&deck)))
    };

    html! {
        <div class="quotes">
            <blockquote id="quote-display" class="quote-display">{ (*quote).clone() }</blockquote>
            <button id="new-quote" class="btn" onclick={on_new_quote}>{ "New Quote" }</button>
        </div>
    }
}
