use std::path::Path;

use crate::error::Result;
use crate::library::catalog::MealCard;

/// Write library cards to a CSV file.
pub fn write_library_csv(cards: &[&MealCard], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "original_name",
        "calories",
        "protein",
        "tags",
        "nutrition_score",
        "calories_reduced",
    ])?;

    for card in cards {
        let tags: Vec<&str> = card.tags.iter().map(|t| t.label()).collect();
        wtr.write_record([
            card.id.to_string(),
            card.name.to_string(),
            card.original_name.to_string(),
            card.calories.to_string(),
            card.protein.to_string(),
            tags.join("; "),
            card.nutrition_score.to_string(),
            card.calories_reduced.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::catalog::{search, LibraryTag};
    use tempfile::NamedTempFile;

    #[test]
    fn test_writes_header_and_rows() {
        let cards = search("", Some(LibraryTag::LowCarb));
        let file = NamedTempFile::new().unwrap();
        write_library_csv(&cards, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[1], "name");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "Cauliflower Fried Rice");
        assert_eq!(&rows[0][5], "Weight Loss; Low Carb");
    }
}
