use crate::models::TypeHolderExample;

/// Render a record one `wire_key: value` pair per line, quoting the string so
/// a line break in it cannot pass for another field
///
/// ```
/// # use petstore_cli::commands::decode::describe;
/// # use petstore_cli::models::TypeHolderExample;
/// let record = TypeHolderExample::new("hello".into(), 1.5, 42, true, vec![1, 2, 3]);
///
/// assert_eq!(
///     describe(&record),
///     "string_item: \"hello\"\n\
///      number_item: 1.5\n\
///      integer_item: 42\n\
///      bool_item: true\n\
///      array_item: [1, 2, 3]\n"
/// );
/// ```
pub fn describe(record: &TypeHolderExample) -> String {
    format!(
        "string_item: {:?}\nnumber_item: {}\ninteger_item: {}\nbool_item: {}\narray_item: {:?}\n",
        record.string_item,
        record.number_item,
        record.integer_item,
        record.bool_item,
        record.array_item
    )
}
