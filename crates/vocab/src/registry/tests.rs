use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

use super::*;
use crate::types::PromptEntry;

fn fruit() -> CustomType {
	CustomType::new([
		ValueEntry::new("apple"),
		ValueEntry::mapped("golden delicious", "apple"),
		ValueEntry::new("banana"),
	])
}

fn vegetable() -> CustomType {
	CustomType::new([
		ValueEntry::new("carrot"),
		ValueEntry::mapped("russel", "potato"),
		ValueEntry::new("potato"),
	])
	.with_mapping_function_name("mapDeliciousVegetable")
	.with_file_name("essentialvegetables.txt")
}

#[fixture]
fn produce() -> TypeRegistry {
	let mut registry = TypeRegistry::new();
	registry.register("fruit", fruit());
	registry.register("vegetable", vegetable());
	registry
}

#[fixture]
fn prompted_fruit() -> TypeRegistry {
	let mut registry = TypeRegistry::new();
	registry.register(
		"fruit",
		CustomType::new([
			ValueEntry::new("apple").with_prompt(PromptEntry::new(["DEFAULT", "desert"], "apple")),
			ValueEntry::mapped("golden delicious", "apple")
				.with_prompt(PromptEntry::new(["apple variety"], "golden delicious apple")),
			ValueEntry::mapped("granny smith", "apple")
				.with_prompt(PromptEntry::new(["apple variety"], "granny smith apple")),
			ValueEntry::new("banana").with_prompt(PromptEntry::new(["DEFAULT", "desert"], "banana")),
		]),
	);
	registry
}

#[fixture]
fn meat() -> TypeRegistry {
	let mut registry = TypeRegistry::new();
	registry.register(
		"meat",
		CustomType::new([
			ValueEntry::new("pork"),
			ValueEntry::mapped("bacon", "pork"),
			ValueEntry::mapped("ham", "pork"),
			ValueEntry::new("beef"),
			ValueEntry::mapped("steak", "beef"),
			ValueEntry::new("the other white meat"),
			ValueEntry::mapped("chicken", "poultry"),
		]),
	);
	registry
}

#[rstest]
fn type_names_follow_registration_order(produce: TypeRegistry) {
	assert_eq!(produce.type_names(), vec!["fruit", "vegetable"]);
	assert_eq!(produce.len(), 2);
}

#[test]
fn empty_registry_has_no_names() {
	let registry = TypeRegistry::new();
	assert!(registry.is_empty());
	assert!(registry.type_names().is_empty());
	assert!(registry.accessors().is_empty());
}

#[rstest]
fn reregistration_replaces_in_place(mut produce: TypeRegistry) {
	let replaced = produce.register("fruit", CustomType::new([ValueEntry::new("cherry")]));

	assert_eq!(replaced, Some(fruit()));
	assert_eq!(produce.type_names(), vec!["fruit", "vegetable"]);
	assert_eq!(produce.values("fruit"), Some(vec!["cherry"]));
	assert_eq!(produce.canonicalize("fruit", "apple"), None);
}

#[rstest]
fn unmapped_value_canonicalizes_to_itself(produce: TypeRegistry) {
	assert_eq!(produce.canonicalize("fruit", "apple"), Some("apple"));
	assert_eq!(produce.canonicalize("vegetable", "potato"), Some("potato"));
}

#[rstest]
fn synonym_canonicalizes_to_mapping(produce: TypeRegistry) {
	assert_eq!(produce.canonicalize("fruit", "golden delicious"), Some("apple"));
	assert_eq!(produce.canonicalize("vegetable", "russel"), Some("potato"));
}

#[rstest]
fn canonicalize_merges_unknown_type_and_value(produce: TypeRegistry) {
	assert_eq!(produce.canonicalize("fruit", "durian"), None);
	assert_eq!(produce.canonicalize("mineral", "apple"), None);
}

#[rstest]
fn try_canonicalize_separates_failures(produce: TypeRegistry) {
	assert_eq!(produce.try_canonicalize("fruit", "golden delicious"), Ok("apple"));
	assert_eq!(
		produce.try_canonicalize("mineral", "apple"),
		Err(LookupError::UnknownType("mineral".into()))
	);
	assert_eq!(
		produce.try_canonicalize("fruit", "durian"),
		Err(LookupError::ValueNotFound {
			type_name: "fruit".into(),
			value: "durian".into(),
		})
	);
}

#[test]
fn mappings_are_not_chased() {
	let mut registry = TypeRegistry::new();
	registry.register(
		"drink",
		CustomType::new([
			ValueEntry::mapped("pop", "soda"),
			ValueEntry::mapped("soda", "soft drink"),
		]),
	);

	assert_eq!(registry.canonicalize("drink", "pop"), Some("soda"));
}

#[test]
fn first_duplicate_wins() {
	let mut registry = TypeRegistry::new();
	registry.register(
		"fruit",
		CustomType::new([ValueEntry::mapped("pear", "bartlett"), ValueEntry::new("pear")]),
	);

	assert_eq!(registry.canonicalize("fruit", "pear"), Some("bartlett"));
	assert_eq!(registry.values("fruit"), Some(vec!["pear", "pear"]));
}

#[rstest]
fn values_include_synonyms_in_order(produce: TypeRegistry) {
	assert_eq!(
		produce.values("fruit"),
		Some(vec!["apple", "golden delicious", "banana"])
	);
	assert_eq!(produce.values("mineral"), None);
	assert_eq!(
		produce.try_values("mineral"),
		Err(LookupError::UnknownType("mineral".into()))
	);
}

#[rstest]
fn dump_file_name_defaults_to_lowercase_name(produce: TypeRegistry) {
	assert_eq!(produce.dump_file_name("fruit").as_deref(), Some("fruit.txt"));
	assert_eq!(
		produce.dump_file_name("vegetable").as_deref(),
		Some("essentialvegetables.txt")
	);
	assert_eq!(produce.dump_file_name("mineral"), None);
}

#[test]
fn dump_file_name_lowercases_mixed_case() {
	let mut registry = TypeRegistry::new();
	registry.register("MYFRUITInput", fruit());
	assert_eq!(registry.dump_file_name("MYFRUITInput").as_deref(), Some("myfruitinput.txt"));
}

#[rstest]
fn accessor_name_defaults_to_capitalized_name(produce: TypeRegistry) {
	assert_eq!(produce.accessor_name("fruit").as_deref(), Some("mapFruit"));
	assert_eq!(
		produce.accessor_name("vegetable").as_deref(),
		Some("mapDeliciousVegetable")
	);
	assert_eq!(produce.accessor_name("mineral"), None);
}

#[rstest]
fn accessor_name_reads_current_definition(mut produce: TypeRegistry) {
	if let Some(def) = produce.definition_mut("fruit") {
		def.mapping_function_name = Some("mapTreeFruit".into());
	}

	assert_eq!(produce.accessor_name("fruit").as_deref(), Some("mapTreeFruit"));
	assert!(produce.accessors().contains("mapFruit"));
	assert!(!produce.accessors().contains("mapTreeFruit"));
}

#[rstest]
fn prompts_default_category(prompted_fruit: TypeRegistry) {
	assert_eq!(prompted_fruit.default_prompts("fruit"), vec!["apple", "banana"]);
	assert_eq!(
		prompted_fruit.prompts("fruit", DEFAULT_CATEGORY),
		prompted_fruit.default_prompts("fruit")
	);
}

#[rstest]
fn prompts_by_category(prompted_fruit: TypeRegistry) {
	assert_eq!(
		prompted_fruit.prompts("fruit", "apple variety"),
		vec!["golden delicious apple", "granny smith apple"]
	);
	assert_eq!(prompted_fruit.prompts("fruit", "desert"), vec!["apple", "banana"]);
	assert!(prompted_fruit.prompts("fruit", "citrus").is_empty());
}

#[rstest]
fn prompts_for_unknown_type_are_empty(prompted_fruit: TypeRegistry) {
	assert!(prompted_fruit.prompts("mineral", DEFAULT_CATEGORY).is_empty());
}

#[test]
fn prompts_are_deduplicated_at_first_occurrence() {
	let mut registry = TypeRegistry::new();
	registry.register(
		"fruit",
		CustomType::new([
			ValueEntry::new("lime").with_prompt(PromptEntry::new(["DEFAULT"], "citrus")),
			ValueEntry::new("apple"),
			ValueEntry::new("pear").with_prompt(PromptEntry::new(["DEFAULT"], "pear")),
			ValueEntry::new("lemon")
				.with_prompt(PromptEntry::new(["DEFAULT"], "citrus"))
				.with_prompt(PromptEntry::new(["sour"], "lemon")),
		]),
	);

	assert_eq!(registry.default_prompts("fruit"), vec!["citrus", "pear"]);
}

#[rstest]
fn remap_value_changes_mapping(mut prompted_fruit: TypeRegistry) {
	prompted_fruit.remap_value("fruit", "golden delicious", "pear");
	assert_eq!(prompted_fruit.canonicalize("fruit", "golden delicious"), Some("pear"));
	assert_eq!(prompted_fruit.canonicalize("fruit", "granny smith"), Some("apple"));
}

#[test]
fn remap_value_to_itself_clears_mapping() {
	let mut registry = TypeRegistry::new();
	registry.register(
		"fruit",
		CustomType::new([ValueEntry::mapped("plantain", "banana")]),
	);

	registry.remap_value("fruit", "plantain", "plantain");

	assert_eq!(registry.canonicalize("fruit", "plantain"), Some("plantain"));
	assert_eq!(
		registry.definition("fruit").and_then(|def| def.find("plantain")),
		Some(&ValueEntry::new("plantain"))
	);
}

#[rstest]
fn remap_missing_value_is_ignored(mut produce: TypeRegistry) {
	produce.remap_value("fruit", "orange", "citrus");
	produce.remap_value("mineral", "quartz", "rock");

	assert_eq!(produce.definition("fruit"), Some(&fruit()));
	assert_eq!(produce.type_names(), vec!["fruit", "vegetable"]);
}

#[rstest]
fn remap_or_insert_appends_missing_value(mut produce: TypeRegistry) {
	produce.remap_value_or_insert("fruit", "orange", "citrus");

	assert_eq!(produce.canonicalize("fruit", "orange"), Some("citrus"));
	assert_eq!(
		produce.values("fruit"),
		Some(vec!["apple", "golden delicious", "banana", "orange"])
	);
}

/// Inserting keeps a literal self-mapping, unlike remapping an existing entry.
#[rstest]
fn remap_or_insert_keeps_literal_self_mapping(mut produce: TypeRegistry) {
	produce.remap_value_or_insert("fruit", "kiwi", "kiwi");

	let def = produce.definition("fruit").expect("fruit is registered");
	assert_eq!(def.find("kiwi"), Some(&ValueEntry::mapped("kiwi", "kiwi")));
	assert_eq!(produce.canonicalize("fruit", "kiwi"), Some("kiwi"));
}

#[rstest]
fn try_remap_value_reports_outcome(mut produce: TypeRegistry) {
	assert_eq!(
		produce.try_remap_value("fruit", "golden delicious", "pear", false),
		Ok(RemapOutcome::Remapped)
	);
	assert_eq!(
		produce.try_remap_value("fruit", "golden delicious", "golden delicious", false),
		Ok(RemapOutcome::Cleared)
	);
	assert_eq!(
		produce.try_remap_value("fruit", "orange", "citrus", true),
		Ok(RemapOutcome::Inserted)
	);
	assert_eq!(
		produce.try_remap_value("fruit", "durian", "citrus", false),
		Err(LookupError::ValueNotFound {
			type_name: "fruit".into(),
			value: "durian".into(),
		})
	);
	assert_eq!(
		produce.try_remap_value("mineral", "quartz", "rock", true),
		Err(LookupError::UnknownType("mineral".into()))
	);
}

#[rstest]
fn remap_mapping_redirects_synonyms_and_canonical(mut meat: TypeRegistry) {
	let changed = meat.remap_mapping("meat", "pork", "the other white meat");

	assert_eq!(changed, 3);
	for value in ["pork", "bacon", "ham"] {
		assert_eq!(meat.canonicalize("meat", value), Some("the other white meat"));
	}
	assert_eq!(meat.canonicalize("meat", "steak"), Some("beef"));
	assert_eq!(meat.canonicalize("meat", "the other white meat"), Some("the other white meat"));
}

#[rstest]
fn remap_mapping_clears_mapping_onto_own_text(mut meat: TypeRegistry) {
	meat.remap_mapping("meat", "pork", "bacon");

	let def = meat.definition("meat").expect("meat is registered");
	assert_eq!(def.find("bacon"), Some(&ValueEntry::new("bacon")));
	assert_eq!(def.find("ham"), Some(&ValueEntry::mapped("ham", "bacon")));
	assert_eq!(def.find("pork"), Some(&ValueEntry::mapped("pork", "bacon")));
}

#[rstest]
fn remap_mapping_to_unregistered_target(mut meat: TypeRegistry) {
	meat.remap_mapping("meat", "poultry", "fowl");
	assert_eq!(meat.canonicalize("meat", "chicken"), Some("fowl"));
}

#[rstest]
fn remap_mapping_same_mapping_is_noop(mut meat: TypeRegistry) {
	let before = meat.definition("meat").cloned();

	assert_eq!(meat.remap_mapping("meat", "pork", "pork"), 0);
	assert_eq!(meat.remap_mapping("mineral", "quartz", "rock"), 0);
	assert_eq!(meat.definition("meat").cloned(), before);
}

#[rstest]
fn reads_are_idempotent(prompted_fruit: TypeRegistry) {
	assert_eq!(prompted_fruit.values("fruit"), prompted_fruit.values("fruit"));
	assert_eq!(
		prompted_fruit.canonicalize("fruit", "granny smith"),
		prompted_fruit.canonicalize("fruit", "granny smith")
	);
	assert_eq!(
		prompted_fruit.prompts("fruit", "apple variety"),
		prompted_fruit.prompts("fruit", "apple variety")
	);
}

#[rstest]
fn iter_yields_definitions_in_order(produce: TypeRegistry) {
	let names: Vec<&str> = produce.iter().map(|(name, _)| name).collect();
	assert_eq!(names, vec!["fruit", "vegetable"]);
	assert_eq!(produce.iter().nth(1).map(|(_, def)| def), Some(&vegetable()));
}
