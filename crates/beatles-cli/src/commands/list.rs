use anyhow::Result;
use beatles_core::Catalog;
use beatles_search::Template;
use std::io::Write;

/// Print every catalog record through `template`, in catalog order.
pub fn list_all<W: Write>(out: &mut W, catalog: &Catalog, template: &Template) -> Result<usize> {
    let mut count = 0;
    for record in catalog.records() {
        writeln!(out, "{}", template.render(record))?;
        count += 1;
    }
    log::debug!("Listed {} records", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beatles_core::Record;

    #[test]
    fn test_list_all_in_catalog_order() {
        let catalog = Catalog::from_records([
            Record::new("Yesterday").with_year("1965"),
            Record::new("Taxman").with_year("1966"),
        ]);
        let template = Template::parse("{year} {title}").unwrap();

        let mut out = Vec::new();
        let count = list_all(&mut out, &catalog, &template).unwrap();

        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "1965 Yesterday\n1966 Taxman\n");
    }

    #[test]
    fn test_list_all_embedded() {
        let catalog = Catalog::embedded().unwrap();
        let mut out = Vec::new();
        let count = list_all(&mut out, &catalog, &Template::default()).unwrap();
        assert_eq!(count, catalog.len());
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), catalog.len());
    }
}
