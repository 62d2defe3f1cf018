/// Database layer for Thingful
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with a startup health
///   check
///
/// Models live in the `models` module at the crate root. Schema management
/// is out of scope for this crate; the expected tables are documented on
/// each model.

pub mod pool;
