use iced::widget::image;

use crate::core::models::CatalogRecord;
use crate::global_constants;

#[derive(Clone)]
pub enum CardImage {
    Pending,
    Available(image::Handle),
    NoImage,
    FetchFailed(String),
}

impl std::fmt::Debug for CardImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardImage::Pending => write!(f, "Pending"),
            CardImage::Available(_) => write!(f, "Available"),
            CardImage::NoImage => write!(f, "NoImage"),
            CardImage::FetchFailed(reason) => write!(f, "FetchFailed({})", reason),
        }
    }
}

/// Presentation-ready view of one catalog record.
#[derive(Debug, Clone)]
pub struct DisplayCard {
    pub record_id: Option<u64>,
    pub title: String,
    pub artist_name: String,
    pub date_text: Option<String>,
    pub medium_text: Option<String>,
    pub image_url: Option<String>,
    pub image: CardImage,
    pub museum_link: Option<String>,
}

impl DisplayCard {
    pub fn from_record(record: &CatalogRecord) -> Self {
        let title = non_blank(record.title.as_deref())
            .unwrap_or(global_constants::DEFAULT_TITLE)
            .to_string();

        let artist_name = record
            .people
            .as_deref()
            .and_then(|people| people.first())
            .and_then(|person| non_blank(person.name.as_deref()))
            .unwrap_or(global_constants::DEFAULT_ARTIST)
            .to_string();

        let image_url = non_empty(record.primaryimageurl.as_deref()).map(str::to_string);
        let image = if image_url.is_some() {
            CardImage::Pending
        } else {
            CardImage::NoImage
        };

        Self {
            record_id: record.id,
            title,
            artist_name,
            date_text: non_empty(record.dated.as_deref()).map(str::to_string),
            medium_text: non_empty(record.medium.as_deref()).map(truncate_medium),
            image_url,
            image,
            museum_link: non_empty(record.url.as_deref()).map(str::to_string),
        }
    }
}

pub fn truncate_medium(medium: &str) -> String {
    let max_chars = global_constants::MEDIUM_MAX_CHARS;

    match medium.char_indices().nth(max_chars) {
        Some((cut_at, _)) => {
            format!("{}{}", &medium[..cut_at], global_constants::ELLIPSIS_MARKER)
        }
        None => medium.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::catalog_record::CatalogPerson;

    fn person(name: Option<&str>) -> CatalogPerson {
        CatalogPerson {
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_record_with_every_field_absent_maps_to_defaults() {
        let card = DisplayCard::from_record(&CatalogRecord::default());

        assert_eq!(card.title, "Untitled");
        assert_eq!(card.artist_name, "Unknown Artist");
        assert!(card.record_id.is_none());
        assert!(card.date_text.is_none());
        assert!(card.medium_text.is_none());
        assert!(card.image_url.is_none());
        assert!(card.museum_link.is_none());
        assert!(matches!(card.image, CardImage::NoImage));
    }

    #[test]
    fn test_full_record_maps_fields_verbatim() {
        let record = CatalogRecord {
            id: Some(12),
            title: Some("Water Lilies".to_string()),
            people: Some(vec![person(Some("Claude Monet"))]),
            dated: Some("c. 1905".to_string()),
            medium: Some("Oil on canvas".to_string()),
            primaryimageurl: Some("https://images.example.org/12.jpg".to_string()),
            url: Some("https://museum.example.org/object/12".to_string()),
        };

        let card = DisplayCard::from_record(&record);

        assert_eq!(card.record_id, Some(12));
        assert_eq!(card.title, "Water Lilies");
        assert_eq!(card.artist_name, "Claude Monet");
        assert_eq!(card.date_text.as_deref(), Some("c. 1905"));
        assert_eq!(card.medium_text.as_deref(), Some("Oil on canvas"));
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://images.example.org/12.jpg")
        );
        assert_eq!(
            card.museum_link.as_deref(),
            Some("https://museum.example.org/object/12")
        );
        assert!(matches!(card.image, CardImage::Pending));
    }

    #[test]
    fn test_only_first_person_is_surfaced() {
        let record = CatalogRecord {
            people: Some(vec![person(Some("Rembrandt")), person(Some("Workshop"))]),
            ..Default::default()
        };

        assert_eq!(DisplayCard::from_record(&record).artist_name, "Rembrandt");
    }

    #[test]
    fn test_empty_people_list_or_nameless_person_falls_back_to_unknown_artist() {
        let empty_people = CatalogRecord {
            people: Some(vec![]),
            ..Default::default()
        };
        let nameless = CatalogRecord {
            people: Some(vec![person(None), person(Some("Second"))]),
            ..Default::default()
        };

        assert_eq!(
            DisplayCard::from_record(&empty_people).artist_name,
            "Unknown Artist"
        );
        assert_eq!(
            DisplayCard::from_record(&nameless).artist_name,
            "Unknown Artist"
        );
    }

    #[test]
    fn test_blank_title_falls_back_to_untitled() {
        let record = CatalogRecord {
            title: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(DisplayCard::from_record(&record).title, "Untitled");
    }

    #[test]
    fn test_empty_optional_strings_are_omitted() {
        let record = CatalogRecord {
            dated: Some(String::new()),
            medium: Some(String::new()),
            primaryimageurl: Some(String::new()),
            url: Some(String::new()),
            ..Default::default()
        };

        let card = DisplayCard::from_record(&record);

        assert!(card.date_text.is_none());
        assert!(card.medium_text.is_none());
        assert!(card.museum_link.is_none());
        assert!(matches!(card.image, CardImage::NoImage));
    }

    #[test]
    fn test_medium_of_61_chars_is_cut_to_60_plus_ellipsis() {
        let medium = "a".repeat(61);

        let truncated = truncate_medium(&medium);

        assert_eq!(truncated, format!("{}...", "a".repeat(60)));
    }

    #[test]
    fn test_medium_of_exactly_60_chars_is_unchanged() {
        let medium = "b".repeat(60);

        assert_eq!(truncate_medium(&medium), medium);
    }

    #[test]
    fn test_medium_truncation_counts_characters_not_bytes() {
        let medium = "é".repeat(61);

        let truncated = truncate_medium(&medium);

        assert_eq!(truncated, format!("{}...", "é".repeat(60)));
    }

    #[test]
    fn test_text_is_passed_through_without_sanitization() {
        let record = CatalogRecord {
            title: Some("<b>Study</b> & *sketch*".to_string()),
            ..Default::default()
        };

        assert_eq!(
            DisplayCard::from_record(&record).title,
            "<b>Study</b> & *sketch*"
        );
    }
}
