#[cfg(test)]
mod tests {
    use super::super::ingredient::IngredientParser;
    use crate::units::{BaseUnit, UnitConversion, UnitTable};
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[case("2 cups all-purpose flour", Some(2.0), Some("cups"), "all-purpose flour")]
    #[case("1/2 tsp salt", Some(0.5), Some("tsp"), "salt")]
    #[case("1 1/2 cups milk", Some(1.5), Some("cups"), "milk")]
    #[case("0.25 lb butter", Some(0.25), Some("lb"), "butter")]
    #[case("250 ml cream", Some(250.0), Some("ml"), "cream")]
    #[case("sugar, 3 tbsp", Some(3.0), Some("tbsp"), "sugar")]
    #[case("2 large eggs", Some(2.0), None, "large eggs")]
    #[case("1 diced onion", Some(1.0), None, "diced onion")]
    #[case("3 eggs", Some(3.0), None, "eggs")]
    #[case("2 cloves garlic", Some(2.0), None, "cloves garlic")]
    #[case("1 pinch salt", Some(1.0), None, "pinch salt")]
    fn test_parse_cascade(
        #[case] line: &str,
        #[case] amount: Option<f64>,
        #[case] unit: Option<&str>,
        #[case] name: &str,
    ) {
        let parser = IngredientParser::default();
        let parsed = parser.parse(line);
        assert_eq!(parsed.original, line);
        assert_eq!(parsed.amount, amount);
        assert_eq!(parsed.unit.as_deref(), unit);
        assert_eq!(parsed.name, name);
    }

    #[rstest]
    #[case("salt and pepper to taste")]
    #[case("a handful of basil")]
    #[case("1/0 cups flour")]
    fn test_unmatched_degrades_to_name(#[case] line: &str) {
        let parser = IngredientParser::default();
        let parsed = parser.parse(line);
        assert_eq!(parsed.amount, None);
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.name, line);
    }

    #[test]
    fn test_empty_line() {
        let parser = IngredientParser::default();
        let parsed = parser.parse("   ");
        assert_eq!(parsed.original, "   ");
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.amount, None);
    }

    #[test]
    fn test_overflowing_amount_degrades_to_name() {
        let parser = IngredientParser::default();
        let line = format!("{}/1 cup milk", "9".repeat(400));
        let parsed = parser.parse(&line);
        assert_eq!(parsed.amount, None);
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.name, line);
    }

    #[test]
    fn test_new_unit_only_needs_table_entry() {
        let parser = IngredientParser::default();
        let before = parser.parse("2 sticks butter");
        assert_eq!(before.unit, None);
        assert_eq!(before.name, "sticks butter");

        let table = UnitTable::with_definitions(&[UnitConversion::new("stick", BaseUnit::G, 113.0)])
            .unwrap();
        let parser = IngredientParser::new(Arc::new(table));
        let after = parser.parse("2 sticks butter");
        assert_eq!(after.unit.as_deref(), Some("sticks"));
        assert_eq!(after.name, "butter");
    }

    #[test]
    fn test_custom_descriptors() {
        let units = Arc::new(UnitTable::standard());
        let parser = IngredientParser::with_descriptors(units, &["Ripe".to_string()]);
        let parsed = parser.parse("3 ripe bananas");
        assert_eq!(parsed.name, "ripe bananas");
        assert_eq!(parsed.unit, None);
    }

    #[test]
    fn test_parse_all_keeps_order() {
        let parser = IngredientParser::default();
        let parsed = parser.parse_all(&["2 cups flour", "1/2 tsp salt", "3 eggs"]);
        let names: Vec<&str> = parsed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "salt", "eggs"]);
    }
}
