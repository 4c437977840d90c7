mod common;

use common::{ITEM, LINE, WORD, by_number, by_text, context};
use pretty_assertions::assert_eq;
use xom_chunk::{Chunk, ChunkKind};
use xom_data::{ByteBuffer, ChunkError, ListBuffer, TextBuffer, Value, Variable};
use xom_primitives::FieldType;

#[test]
fn test_sort_lines_in_a_rope_buffer() {
	let ctx = context();
	let mut text = TextBuffer::new("t", "b\nc\na");
	Chunk::new(&mut text, &ctx, LINE, 1, -1).sort(&by_text).unwrap();
	assert_eq!(text.text(), "a\nb\nc");
}

#[test]
fn test_sort_lines_in_a_variable() {
	let ctx = context();
	let mut v = Variable::new("v", "b\nc\na");
	Chunk::new(&mut v, &ctx, LINE, 1, -1).sort(&by_text).unwrap();
	assert_eq!(v.value(), &Value::from("a\nb\nc"));
}

#[test]
fn test_tweens_keep_their_positions() {
	let ctx = context();
	let mut text = TextBuffer::new("t", "  pear  apple\tfig ");
	Chunk::new(&mut text, &ctx, WORD, 1, -1).sort(&by_text).unwrap();
	assert_eq!(text.text(), "  apple  fig\tpear ");
}

#[test]
fn test_sort_a_sub_range_of_items() {
	let ctx = context();
	let mut v = Variable::new("v", "9,3,2,1,0");
	Chunk::new(&mut v, &ctx, ITEM, 2, 4).sort(&by_number).unwrap();
	assert_eq!(v.value(), &Value::from("9,1,2,3,0"));
}

#[test]
fn test_descending_comparator() {
	let ctx = context();
	let mut v = Variable::new("v", "1,3,2");
	Chunk::new(&mut v, &ctx, ITEM, 1, -1)
		.sort(&|a, b| by_number(b, a))
		.unwrap();
	assert_eq!(v.value(), &Value::from("3,2,1"));
}

#[test]
fn test_sort_list_elements_natively() {
	let ctx = context();
	let mut xs = ListBuffer::new("xs", [5, 4, 3, 2, 1].map(Value::from));
	Chunk::new(&mut xs, &ctx, ChunkKind::Element, 2, 4).sort(&by_number).unwrap();
	assert_eq!(xs.items(), [5, 2, 3, 4, 1].map(Value::from).as_slice());
}

#[test]
fn test_sort_list_elements_through_a_variable() {
	let ctx = context();
	let mut v = Variable::new("v", Value::list(["c", "a", "b"].map(Value::from)));
	Chunk::new(&mut v, &ctx, ChunkKind::Element, 1, -1).sort(&by_text).unwrap();
	assert_eq!(v.value(), &Value::list(["a", "b", "c"].map(Value::from)));
}

#[test]
fn test_sort_bytes() {
	let ctx = context();
	let mut bytes = ByteBuffer::new("b", vec![9, 7, 8, 1]);
	Chunk::new(&mut bytes, &ctx, ChunkKind::Byte, 1, 3)
		.sort(&|a, b| a.as_binary().unwrap().cmp(b.as_binary().unwrap()))
		.unwrap();
	assert_eq!(bytes.bytes(), &[7, 8, 9, 1]);
}

#[test]
fn test_sort_past_the_end_is_a_no_op() {
	let ctx = context();
	let mut v = Variable::new("v", "b,a");
	Chunk::new(&mut v, &ctx, ITEM, 5, 9).sort(&by_text).unwrap();
	assert_eq!(v.value(), &Value::from("b,a"));
}

#[test]
fn test_fields_cannot_be_sorted() {
	let ctx = context();
	let mut bytes = ByteBuffer::new("b", vec![0; 8]);
	let err = Chunk::new(&mut bytes, &ctx, ChunkKind::field(FieldType::ShortInt), 1, 3)
		.sort(&by_number)
		.unwrap_err();
	assert!(matches!(err, ChunkError::Unsupported { .. }));
}

#[test]
fn test_sort_items_of_one_line() {
	let ctx = context();
	let mut text = TextBuffer::new("t", "z\nc,b,a\ny");
	let mut line = Chunk::at(&mut text, &ctx, LINE, 2);
	Chunk::new(&mut line, &ctx, ITEM, 1, -1).sort(&by_text).unwrap();
	assert_eq!(text.text(), "z\na,b,c\ny");
}
