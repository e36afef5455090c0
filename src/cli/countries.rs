use tabled::Table;

use crate::{countries::CountryTable, warning};

pub fn countries(search: Option<String>) {
    let rows = CountryTable::markets().search(search.as_deref());

    if rows.is_empty() {
        warning!("No country matches '{}'.", search.unwrap_or_default());
        return;
    }

    println!("{}", Table::new(rows));
}
