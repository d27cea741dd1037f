pub(crate) const TABLE_PRICES_NAME: &str = "prices";

pub(crate) const TABLE_MIGRATIONS_NAME: &str = "_migrations";
