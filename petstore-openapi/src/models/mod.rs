mod type_holder_example;
pub use self::type_holder_example::TypeHolderExample;
