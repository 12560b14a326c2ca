


use crate::codec::{self, DecodingError, EncodingError, Format};

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeHolderExample {
    #[serde(rename = "string_item")]
    pub string_item: String,
    #[serde(rename = "number_item", serialize_with = "codec::finite_f32")]
    pub number_item: f32,
    #[serde(rename = "integer_item")]
    pub integer_item: i32,
    #[serde(rename = "bool_item")]
    pub bool_item: bool,
    /// An empty list has no element at all in the XML form, hence the default
    #[serde(rename = "array_item", default)]
    pub array_item: Vec<i32>,
}

impl TypeHolderExample {
    pub fn new(
        string_item: String,
        number_item: f32,
        integer_item: i32,
        bool_item: bool,
        array_item: Vec<i32>,
    ) -> TypeHolderExample {
        TypeHolderExample {
            string_item,
            number_item,
            integer_item,
            bool_item,
            array_item,
        }
    }

    pub fn to_json(&self) -> Result<String, EncodingError> {
        codec::encode(self, Format::Json)
    }

    pub fn to_xml(&self) -> Result<String, EncodingError> {
        codec::encode(self, Format::Xml)
    }

    pub fn from_json(payload: &str) -> Result<TypeHolderExample, DecodingError> {
        codec::decode(payload, Format::Json)
    }

    pub fn from_xml(payload: &str) -> Result<TypeHolderExample, DecodingError> {
        codec::decode(payload, Format::Xml)
    }
}
