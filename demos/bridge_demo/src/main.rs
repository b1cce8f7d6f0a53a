//! Bridge demo
//!
//! Drives the same owner/value scenario through each of the bridge's call
//! surfaces in turn:
//!   1. flat entry points, resolved by name at compile time
//!   2. the capability tables behind the library registry
//!   3. RAII wrappers that release on drop

use anyhow::Result;
use handle_broker::{flat, lib, OwnedOwner, OwnedValue};

fn use_flat_form() -> Result<()> {
    log::info!("--- flat form ---");

    let value = flat::value_create(2)?;
    let owner = flat::owner_create("Hello world!", 10)?;

    flat::owner_set_value(owner, value)?;
    flat::owner_dump(owner)?;

    flat::owner_release(owner)?;
    flat::value_release(value)?;

    // A second release is reported, not undefined.
    if let Err(err) = flat::value_release(value) {
        log::info!("second release reported: {err}");
    }
    Ok(())
}

fn use_table_form() -> Result<()> {
    log::info!("--- table form ---");

    let lib = lib();
    let value = (lib.value.create)(2)?;
    let owner = (lib.owner.create)("Hello world!", 10)?;

    (lib.owner.set_value)(owner, value)?;
    (lib.owner.dump)(owner)?;

    (lib.owner.release)(owner)?;
    (lib.value.release)(value)?;
    Ok(())
}

fn use_wrappers() -> Result<()> {
    log::info!("--- owned wrappers ---");

    let value = OwnedValue::new(2)?;
    let owner = OwnedOwner::new("Hello world!", 10)?;

    owner.attach(&value)?;
    owner.dump()?;

    // Both handles released on drop, in declaration-reverse order.
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    use_flat_form()?;
    use_table_form()?;
    use_wrappers()?;

    log::info!("all three call surfaces agreed");
    Ok(())
}
