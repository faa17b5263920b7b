//! Static mapping from classifier output index to disease name.

use super::ClassIndex;

pub const UNKNOWN_DISEASE: &str = "Unknown Disease";

/// Disease names in the order the classifier was trained with.
pub static DISEASE_LABELS: [&str; 41] = [
    "Paroxysmal Positional Vertigo",
    "AIDS",
    "Acne",
    "Alcoholic hepatitis",
    "Allergy",
    "Arthritis",
    "Bronchial Asthma",
    "Cervical spondylosis",
    "Chicken pox",
    "Chronic cholestasis",
    "Common Cold",
    "Dengue",
    "Diabetes",
    "Dimorphic hemorrhoids (piles)",
    "Drug Reaction",
    "Fungal infection",
    "GERD",
    "Gastroenteritis",
    "Heart attack",
    "Hepatitis B",
    "Hepatitis C",
    "Hepatitis D",
    "Hepatitis E",
    "Hypertension",
    "Hyperthyroidism",
    "Hypoglycemia",
    "Hypothyroidism",
    "Impetigo",
    "Jaundice",
    "Malaria",
    "Migraine",
    "Osteoarthritis",
    "Paralysis (brain hemorrhage)",
    "Peptic ulcer disease",
    "Pneumonia",
    "Psoriasis",
    "Tuberculosis",
    "Typhoid",
    "Urinary tract infection",
    "Varicose veins",
    "Hepatitis A",
];

/// Looks up the disease for `class`, falling back to [`UNKNOWN_DISEASE`].
pub fn disease_name(class: ClassIndex) -> &'static str {
    usize::try_from(class.0)
        .ok()
        .and_then(|i| DISEASE_LABELS.get(i).copied())
        .unwrap_or(UNKNOWN_DISEASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_indices() {
        assert_eq!(
            disease_name(ClassIndex(0)),
            "Paroxysmal Positional Vertigo"
        );
        assert_eq!(disease_name(ClassIndex(15)), "Fungal infection");
        assert_eq!(disease_name(ClassIndex(40)), "Hepatitis A");
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(disease_name(ClassIndex(41)), UNKNOWN_DISEASE);
        assert_eq!(disease_name(ClassIndex(1_000)), UNKNOWN_DISEASE);
        assert_eq!(disease_name(ClassIndex(-1)), UNKNOWN_DISEASE);
    }

    #[test]
    fn test_labels_are_non_empty() {
        assert!(DISEASE_LABELS.iter().all(|name| !name.is_empty()));
    }
}
