use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn chars(s: &str) -> Vec<char> {
	s.chars().collect()
}

fn pieces(s: &str, unit: TextUnit) -> Vec<String> {
	let text = chars(s);
	DelimitedChunker
		.map(&text, unit, &Delimiters::default())
		.spans()
		.iter()
		.map(|span| text[span.range()].iter().collect())
		.collect()
}

#[rstest]
#[case("", 0)]
#[case("a", 1)]
#[case("a,b,c", 3)]
#[case("a,b,", 2)]
#[case(",", 1)]
#[case("a,,b", 3)]
fn test_item_count(#[case] text: &str, #[case] expected: usize) {
	assert_eq!(
		DelimitedChunker.map(&chars(text), TextUnit::Item, &Delimiters::default()).count(),
		expected
	);
}

#[test]
fn test_items_keep_empty_middle_unit() {
	assert_eq!(pieces("a,,b", TextUnit::Item), vec!["a", "", "b"]);
}

#[test]
fn test_lines_recognize_every_break() {
	assert_eq!(pieces("a\r\nb\rc\nd\u{2028}e", TextUnit::Line), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_trailing_line_break_opens_no_line() {
	assert_eq!(pieces("a\nb\n", TextUnit::Line), vec!["a", "b"]);
	assert_eq!(pieces("\n", TextUnit::Line), vec![""]);
}

#[test]
fn test_words() {
	assert_eq!(pieces("  the quick\tbrown\n fox ", TextUnit::Word), vec!["the", "quick", "brown", "fox"]);
}

#[test]
fn test_sentences() {
	assert_eq!(
		pieces("Hi there. How are you?  Fine!", TextUnit::Sentence),
		vec!["Hi there.", "How are you?", "Fine!"]
	);
}

#[test]
fn test_paragraphs() {
	assert_eq!(pieces("\n\none\ntwo\n\n\nthree", TextUnit::Paragraph), vec!["one", "two", "three"]);
}

#[test]
fn test_custom_delimiters() {
	let delimiters = Delimiters {
		item: ';',
		..Delimiters::default()
	};
	let text = chars("a;b,c");
	let map = DelimitedChunker.map(&text, TextUnit::Item, &delimiters);
	assert_eq!(map.count(), 2);
}

#[test]
fn test_offsets_outside_the_map() {
	let text = chars("ab,cd");
	let map = DelimitedChunker.map(&text, TextUnit::Item, &Delimiters::default());
	assert_eq!(map.start_of(0), 0);
	assert_eq!(map.end_of(-3), 0);
	assert_eq!(map.start_of(2), 3);
	assert_eq!(map.end_of(2), 5);
	assert_eq!(map.start_of(3), 5);
	assert_eq!(map.end_of(9), 5);
}

#[test]
fn test_filler_per_unit() {
	let d = Delimiters::default();
	assert_eq!(TextUnit::Line.filler(&d).as_deref(), Some("\n"));
	assert_eq!(TextUnit::Item.filler(&d).as_deref(), Some(","));
	assert_eq!(TextUnit::Word.filler(&d), None);
	assert_eq!(TextUnit::Character.filler(&d), None);
}
