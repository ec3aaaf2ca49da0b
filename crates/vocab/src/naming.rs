//! Name derivation for accessors and dump files.

/// Derives the default accessor name for a type: `"map"` followed by the
/// type name with its first character uppercased.
///
/// Only the first `char` is touched. Its uppercase form may be longer than
/// one character (`ß` becomes `SS`). An empty name yields `"map"`.
///
/// ```
/// assert_eq!(slotvocab::derive_accessor_name("fruit"), "mapFruit");
/// assert_eq!(slotvocab::derive_accessor_name("MYFRUITInput"), "mapMYFRUITInput");
/// assert_eq!(slotvocab::derive_accessor_name("7up"), "map7up");
/// assert_eq!(slotvocab::derive_accessor_name(""), "map");
/// ```
pub fn derive_accessor_name(type_name: &str) -> String {
	let mut chars = type_name.chars();
	let mut name = String::with_capacity(type_name.len() + 3);
	name.push_str("map");
	if let Some(first) = chars.next() {
		name.extend(first.to_uppercase());
		name.push_str(chars.as_str());
	}
	name
}

/// Derives the default dump file name for a type: the lowercased type name
/// with a `.txt` extension.
///
/// ```
/// assert_eq!(slotvocab::derive_dump_file_name("MyFruitType"), "myfruittype.txt");
/// ```
pub fn derive_dump_file_name(type_name: &str) -> String {
	format!("{}.txt", type_name.to_lowercase())
}
