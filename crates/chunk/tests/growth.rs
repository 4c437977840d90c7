mod common;

use common::{ITEM, LINE, context, read};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use xom_chunk::{Chunk, ChunkKind};
use xom_data::{ChunkError, Container, ListBuffer, Placement, TextBuffer, Value, Variable};

fn numbers(ns: &[i64]) -> Vec<Value> {
	ns.iter().copied().map(Value::from).collect()
}

/// `items` without the 1-based elements `s` through `e`, clamped.
fn without(items: &[Value], s: i64, e: i64) -> Vec<Value> {
	items
		.iter()
		.enumerate()
		.filter(|(i, _)| !(s..=e).contains(&(*i as i64 + 1)))
		.map(|(_, item)| item.clone())
		.collect()
}

#[test]
fn test_delete_elements_through_a_variable() {
	let ctx = context();
	let mut v = Variable::new("v", Value::List(numbers(&[0, 1, 2, 3, 4, 5])));
	Chunk::new(&mut v, &ctx, ChunkKind::Element, 2, 4).delete().unwrap();
	assert_eq!(v.value(), &Value::List(numbers(&[0, 4, 5])));
}

#[test]
fn test_put_after_element() {
	let ctx = context();
	let mut xs = ListBuffer::new("xs", numbers(&[10, 20, 30]));
	Chunk::at(&mut xs, &ctx, ChunkKind::Element, 2)
		.put(Placement::After, 99)
		.unwrap();
	assert_eq!(xs.items(), numbers(&[10, 20, 99, 30]).as_slice());
}

#[test]
fn test_put_into_element_past_end_pads_with_empty() {
	let ctx = context();
	let mut xs = ListBuffer::new("xs", numbers(&[10, 20, 30]));
	Chunk::at(&mut xs, &ctx, ChunkKind::Element, 5)
		.put(Placement::Into, 77)
		.unwrap();
	let mut expected = numbers(&[10, 20, 30]);
	expected.extend([Value::Empty, Value::from(77)]);
	assert_eq!(xs.items(), expected.as_slice());
}

#[test]
fn test_same_growth_through_a_variable() {
	let ctx = context();
	let mut v = Variable::new("v", Value::List(numbers(&[10, 20, 30])));
	Chunk::at(&mut v, &ctx, ChunkKind::Element, 5)
		.put(Placement::Into, 77)
		.unwrap();
	let mut expected = numbers(&[10, 20, 30]);
	expected.extend([Value::Empty, Value::from(77)]);
	assert_eq!(v.value(), &Value::List(expected));
}

#[test]
fn test_put_before_element_past_end() {
	let ctx = context();
	let mut xs = ListBuffer::new("xs", numbers(&[1, 2, 3]));
	Chunk::at(&mut xs, &ctx, ChunkKind::Element, 5)
		.put(Placement::Before, 9)
		.unwrap();
	let mut expected = numbers(&[1, 2, 3]);
	expected.extend([Value::Empty, Value::from(9)]);
	assert_eq!(xs.items(), expected.as_slice());
}

#[test]
fn test_item_just_past_the_end() {
	let ctx = context();
	let mut v = Variable::new("v", "a,b,c");
	Chunk::at(&mut v, &ctx, ITEM, 4).put(Placement::Into, "X").unwrap();
	assert_eq!(v.value(), &Value::from("a,b,c,X"));
}

#[test]
fn test_item_three_past_the_end() {
	let ctx = context();
	let mut v = Variable::new("v", "a,b,c");
	Chunk::at(&mut v, &ctx, ITEM, 6).put(Placement::Into, "X").unwrap();
	assert_eq!(v.value(), &Value::from("a,b,c,,,X"));
	assert_eq!(Chunk::new(&mut v, &ctx, ITEM, 1, -1).number(), Ok(6));
}

#[test]
fn test_lines_grow_with_the_line_ending() {
	let ctx = context();
	let mut text = TextBuffer::new("t", "a\nb");
	Chunk::at(&mut text, &ctx, LINE, 4).put(Placement::Into, "X").unwrap();
	assert_eq!(text.text(), "a\nb\n\nX");
	assert_eq!(read(&mut text, &ctx, LINE, 4), Value::from("X"));
}

#[test]
fn test_empty_text_needs_one_delimiter_fewer() {
	let ctx = context();
	let mut v = Variable::new("v", "");
	Chunk::at(&mut v, &ctx, ITEM, 3).put(Placement::Into, "X").unwrap();
	assert_eq!(v.value(), &Value::from(",,X"));
}

#[test]
fn test_negative_ordinal_grows_at_the_front() {
	let ctx = context();
	let mut v = Variable::new("v", "a");
	Chunk::at(&mut v, &ctx, ITEM, -3).put(Placement::Into, "X").unwrap();
	assert_eq!(v.value(), &Value::from("X,,a"));
}

#[test]
fn test_put_after_item_appends_to_it() {
	let ctx = context();
	let mut text = TextBuffer::new("t", "a,b,c");
	Chunk::at(&mut text, &ctx, ITEM, 2).put(Placement::After, "!").unwrap();
	Chunk::at(&mut text, &ctx, ITEM, 1).put(Placement::Before, "<").unwrap();
	assert_eq!(text.text(), "<a,b!,c");
}

#[test]
fn test_words_do_not_grow() {
	let ctx = context();
	let mut v = Variable::new("v", "one two");
	Chunk::at(&mut v, &ctx, common::WORD, 5).put(Placement::Into, "three").unwrap();
	assert_eq!(v.value(), &Value::from("one twothree"));
}

#[test]
fn test_delete_removes_the_trailing_delimiter() {
	let ctx = context();
	let mut text = TextBuffer::new("t", "a,b,c");
	Chunk::at(&mut text, &ctx, ITEM, 2).delete().unwrap();
	assert_eq!(text.text(), "a,c");

	let mut v = Variable::new("v", "one\ntwo\nthree");
	Chunk::at(&mut v, &ctx, LINE, 1).delete().unwrap();
	assert_eq!(v.value(), &Value::from("two\nthree"));
}

#[test]
fn test_delete_past_the_end_changes_nothing() {
	let ctx = context();
	let mut text = TextBuffer::new("t", "a,b");
	Chunk::at(&mut text, &ctx, ITEM, 7).delete().unwrap();
	assert_eq!(text.text(), "a,b");
}

#[rstest]
#[case(i64::MIN)]
#[case(i64::MAX)]
fn test_extreme_ordinals_refuse_to_grow(#[case] at: i64) {
	let ctx = context();
	let mut xs = ListBuffer::new("xs", []);
	assert_eq!(Chunk::at(&mut xs, &ctx, ChunkKind::Element, at).get(), Ok(Value::Empty));
	assert!(matches!(
		Chunk::at(&mut xs, &ctx, ChunkKind::Element, at).put(Placement::Into, 1),
		Err(ChunkError::MalformedRange(_))
	));
	assert!(xs.items().is_empty());

	let mut v = Variable::new("v", "a");
	assert!(matches!(
		Chunk::at(&mut v, &ctx, ITEM, at).put(Placement::Before, "x"),
		Err(ChunkError::MalformedRange(_))
	));
	assert_eq!(v.value(), &Value::from("a"));
}

#[test]
fn test_extreme_word_ordinal_writes_at_the_edge() {
	let ctx = context();
	let mut v = Variable::new("v", "one");
	Chunk::at(&mut v, &ctx, common::WORD, i64::MAX).put(Placement::Into, "!").unwrap();
	assert_eq!(v.value(), &Value::from("one!"));
}

proptest! {
	#[test]
	fn prop_delete_removes_exactly_the_range(len in 0usize..20, a in 1i64..25, b in 1i64..25) {
		let ctx = context();
		let (s, e) = (a.min(b), a.max(b));
		let original: Vec<Value> = (0..len as i64).map(Value::from).collect();
		let expected = without(&original, s, e);

		let mut xs = ListBuffer::new("xs", original.clone());
		Chunk::new(&mut xs, &ctx, ChunkKind::Element, s, e).delete().unwrap();
		prop_assert_eq!(xs.items(), expected.as_slice());

		let mut v = Variable::new("v", Value::List(original));
		Chunk::new(&mut v, &ctx, ChunkKind::Element, s, e).delete().unwrap();
		prop_assert_eq!(v.value(), &Value::List(expected));
	}

	#[test]
	fn prop_written_item_reads_back(
		items in proptest::collection::vec("[a-z]{0,3}", 0..6),
		k in 1i64..10,
		x in "[a-z]{0,5}",
	) {
		let ctx = context();
		let mut v = Variable::new("v", items.join(","));
		Chunk::at(&mut v, &ctx, ITEM, k).put(Placement::Into, x.as_str()).unwrap();
		prop_assert_eq!(read(&mut v, &ctx, ITEM, k), Value::from(x.as_str()));
	}

	#[test]
	fn prop_negative_item_matches_positive(
		items in proptest::collection::vec("[a-z]{1,3}", 1..8),
		k_seed in 0usize..8,
	) {
		let ctx = context();
		let n = items.len() as i64;
		let k = 1 + (k_seed as i64) % n;
		let mut v = Variable::new("v", items.join(","));
		prop_assert_eq!(read(&mut v, &ctx, ITEM, k), read(&mut v, &ctx, ITEM, k - n - 1));
	}
}
