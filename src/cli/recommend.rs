use rand::SeedableRng;
use rand::rngs::StdRng;
use whattoeat_recipe::Catalog;
use whattoeat_recommend::{Request, Selector};

use super::OutputFormat;

pub fn recommend(
    config: whattoeat::Config,
    ingredients: Vec<String>,
    people: i64,
    seed: Option<u64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let request = Request::new(
        ingredients.into_iter().filter(|i| !i.is_empty()),
        people,
    );

    let selector =
        Selector::new(Catalog::builtin()).with_separator(config.selector.separator.to_owned());

    let outcome = match seed.or(config.selector.seed) {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            selector.select(&request, &mut StdRng::seed_from_u64(seed))
        }
        None => selector.select(&request, &mut rand::rng()),
    };

    let text = selector.render(&outcome);

    match format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => {
            let dishes: Vec<&str> = outcome
                .as_ref()
                .map(|r| r.names().collect())
                .unwrap_or_default();
            let reply = serde_json::json!({
                "ok": outcome.is_ok(),
                "text": text,
                "dishes": dishes,
            });
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
    }

    Ok(())
}
