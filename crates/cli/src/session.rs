//! Menu loop: read a selection, run it, report the outcome, repeat.
//!
//! Failures of a single action are printed and the loop continues. Only I/O
//! errors on the console itself end the session with an error.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use stockroom_core::{DomainError, ProductId};
use stockroom_infra::{CatalogStore, ProductStore, StoreError};
use stockroom_products::{Category, Price, Product, Size, Stock, UnitForm};

use crate::console::Console;
use crate::menu::{self, MenuOption};

#[derive(Debug, Error)]
enum ActionError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("input closed")]
    EndOfInput,
}

/// Product category chosen from one of the three add options.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum AddKind {
    Electronic,
    Food,
    Clothing,
}

/// Whether the loop should keep going after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Run the interactive menu until the user exits or input runs out.
pub fn run<R, W, S>(console: &mut Console<R, W>, store: &ProductStore<S>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: CatalogStore,
{
    loop {
        console.say("")?;
        console.say(menu::render())?;

        let Some(choice) = console.prompt("Select an option")? else {
            return Ok(());
        };

        let Ok(option) = choice.parse::<MenuOption>() else {
            console.say("Invalid option. Please choose an option between 1 and 8.")?;
            continue;
        };

        if option == MenuOption::Exit {
            console.say("Exiting...")?;
            return Ok(());
        }

        match dispatch(console, store, option) {
            Ok(()) => {}
            Err(ActionError::Io(e)) => return Err(e),
            Err(ActionError::EndOfInput) => return Ok(()),
            Err(err) => {
                tracing::warn!(option = option.number(), error = %err, "action failed");
                console.say(format!("Error: {err}"))?;
            }
        }

        if pause(console)? == Flow::Stop {
            return Ok(());
        }
    }
}

fn pause<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Flow> {
    Ok(if console.pause()? {
        Flow::Continue
    } else {
        Flow::Stop
    })
}

fn dispatch<R, W, S>(
    console: &mut Console<R, W>,
    store: &ProductStore<S>,
    option: MenuOption,
) -> Result<(), ActionError>
where
    R: BufRead,
    W: Write,
    S: CatalogStore,
{
    match option {
        MenuOption::AddElectronic => add_product(console, store, AddKind::Electronic)?,
        MenuOption::AddFood => add_product(console, store, AddKind::Food)?,
        MenuOption::AddClothing => add_product(console, store, AddKind::Clothing)?,
        MenuOption::FindById => {
            let id = read_id(console, "Product ID to find")?;
            let product = store.fetch(&id)?;
            console.say(format!("Product found: {product}"))?;
        }
        MenuOption::UpdatePrice => {
            let id = read_id(console, "Product ID to update")?;
            let price = Price::parse(&ask(console, "New price")?)?;
            let product = store.update_price(&id, price.value())?;
            console.say(format!("Price updated for product {id}: {}", product.price()))?;
        }
        MenuOption::DeleteById => {
            let id = read_id(console, "Product ID to delete")?;
            store.delete(&id)?;
            console.say(format!("Product {id} deleted."))?;
        }
        MenuOption::ListAll => list_all(console, store)?,
        MenuOption::Exit => {}
    }
    Ok(())
}

fn ask<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str) -> Result<String, ActionError> {
    console.prompt(label)?.ok_or(ActionError::EndOfInput)
}

fn read_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<ProductId, ActionError> {
    Ok(ProductId::new(ask(console, label)?)?)
}

fn add_product<R, W, S>(
    console: &mut Console<R, W>,
    store: &ProductStore<S>,
    kind: AddKind,
) -> Result<(), ActionError>
where
    R: BufRead,
    W: Write,
    S: CatalogStore,
{
    let product = read_product(console, kind)?;
    store.create(&product)?;
    console.say(format!("Product {} created.", product.name()))?;
    Ok(())
}

/// Prompt for every field in order, failing on the first invalid one.
fn read_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: AddKind,
) -> Result<Product, ActionError> {
    let id = read_id(console, "Product ID")?;
    let name = ask(console, "Product name")?;
    let price = Price::parse(&ask(console, "Price")?)?;
    let stock = Stock::parse(&ask(console, "Units in stock")?)?;

    let category = match kind {
        AddKind::Electronic => Category::Electronic {
            brand: ask(console, "Brand")?,
        },
        AddKind::Food => {
            let expiration_date = ask(console, "Expiration date (dd/mm/yyyy)")?;
            let unit_form = ask(console, "Sold by (unit, dozen, kilo)")?.parse::<UnitForm>()?;
            Category::Food {
                expiration_date,
                unit_form,
            }
        }
        AddKind::Clothing => {
            let brand_name = ask(console, "Brand name")?;
            let size = ask(console, "Size (XS, S, M, L, XL, XXL)")?.parse::<Size>()?;
            Category::Clothing { brand_name, size }
        }
    };

    Ok(Product::from_parts(id, name, price, stock, category)?)
}

fn list_all<R, W, S>(console: &mut Console<R, W>, store: &ProductStore<S>) -> Result<(), ActionError>
where
    R: BufRead,
    W: Write,
    S: CatalogStore,
{
    let listing = store.list()?;
    if listing.is_empty() {
        console.say("No products in inventory.")?;
        return Ok(());
    }

    console.say("==================== All products ====================")?;
    for entry in &listing {
        match entry {
            Ok(product) => console.say(product)?,
            Err(err) => console.say(format!("Skipped: {err}"))?,
        }
    }
    console.say("======================================================")?;
    Ok(())
}
