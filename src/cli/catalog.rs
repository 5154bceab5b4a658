use whattoeat_recipe::Catalog;

use super::OutputFormat;

pub fn list(format: OutputFormat) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(catalog.recipes())?),
        OutputFormat::Text => {
            for recipe in catalog.iter() {
                println!(
                    "{} [{}] {}",
                    recipe.name,
                    recipe.course,
                    recipe.ingredients.join("、")
                );
            }
            println!();
            println!(
                "known ingredients: {}",
                catalog.ingredients().into_iter().collect::<Vec<_>>().join("、")
            );
        }
    }

    Ok(())
}
