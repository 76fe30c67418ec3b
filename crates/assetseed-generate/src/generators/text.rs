use rand::{Rng, RngCore};

pub(crate) const DESCRIPTION_TEMPLATE_COUNT: usize = 5;

const NAME_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `doc-NNN` for a 1-based index.
pub fn document_id(index: usize) -> String {
    format!("doc-{index:03}")
}

/// `<asset type> <letter><NNN>`, e.g. `Turbine Q007`.
pub fn name(index: usize, asset_type: &str, rng: &mut dyn RngCore) -> String {
    let letter = char::from(NAME_LETTERS[rng.random_range(0..NAME_LETTERS.len())]);
    format!("{asset_type} {letter}{index:03}")
}

/// One of the fixed description sentences, filled from the document's own draw.
pub fn description(
    asset_type: &str,
    region: &str,
    manufacturer: &str,
    rng: &mut dyn RngCore,
) -> String {
    let template = rng.random_range(0..DESCRIPTION_TEMPLATE_COUNT);
    render_description(template, asset_type, region, manufacturer)
}

fn render_description(
    template: usize,
    asset_type: &str,
    region: &str,
    manufacturer: &str,
) -> String {
    let lower = asset_type.to_lowercase();
    match template {
        0 => format!(
            "A high-efficiency {lower} manufactured by {manufacturer}. Located in {region}."
        ),
        1 => format!(
            "{manufacturer} {asset_type} unit operating in {region}. Critical for process flow."
        ),
        2 => format!(
            "Standard {lower} for auxiliary support in {region}. Maintained by {manufacturer}."
        ),
        3 => format!("Heavy-duty {asset_type} designed for extreme conditions in {region}."),
        _ => format!("Backup {lower} unit, model X-2000, located in {region} sector."),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn ids_are_zero_padded() {
        assert_eq!(document_id(1), "doc-001");
        assert_eq!(document_id(42), "doc-042");
        assert_eq!(document_id(100), "doc-100");
        assert_eq!(document_id(1000), "doc-1000");
    }

    #[test]
    fn name_carries_asset_type_letter_and_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let value = name(7, "Heat Exchanger", &mut rng);
        let suffix = value.strip_prefix("Heat Exchanger ").expect("asset type prefix");
        assert_eq!(suffix.len(), 4);
        assert!(suffix.as_bytes()[0].is_ascii_uppercase());
        assert!(suffix.ends_with("007"));
    }

    #[test]
    fn templates_lowercase_asset_type_where_expected() {
        assert_eq!(
            render_description(0, "Heat Exchanger", "Region02", "GE"),
            "A high-efficiency heat exchanger manufactured by GE. Located in Region02."
        );
        assert_eq!(
            render_description(1, "Pump", "Region09", "Siemens"),
            "Siemens Pump unit operating in Region09. Critical for process flow."
        );
        assert_eq!(
            render_description(4, "Valve", "Region11", "GE"),
            "Backup valve unit, model X-2000, located in Region11 sector."
        );
    }

    #[test]
    fn every_template_mentions_region() {
        for template in 0..DESCRIPTION_TEMPLATE_COUNT {
            let text = render_description(template, "Pump", "Region05", "Mitsubishi");
            assert!(text.contains("Region05"), "template {template}: {text}");
        }
    }
}
