//! serde `Serializer` producing a [`Repr`] tree

use serde::ser::{self, Serialize};

use super::Repr;
use vb_core::{Error, Result};

/// Convert any serializable value into a [`Repr`].
///
/// Sequences, fixed-size arrays and tuples become `Repr::List` (serde does
/// not tell arrays and tuples apart), `()` is the empty tuple and `None` is
/// `Repr::None`. Positional call arguments are built by
/// [`Args`](crate::Args), not here.
pub fn to_repr<T: Serialize + ?Sized>(value: &T) -> Result<Repr> {
    value.serialize(ReprSerializer)
}

/// Serializer whose output is a [`Repr`]
pub struct ReprSerializer;

impl ser::Serializer for ReprSerializer {
    type Ok = Repr;
    type Error = Error;

    type SerializeSeq = SerializeItems;
    type SerializeTuple = SerializeItems;
    type SerializeTupleStruct = SerializeItems;
    type SerializeTupleVariant = SerializeItems;
    type SerializeMap = SerializeEntries;
    type SerializeStruct = SerializeFields;
    type SerializeStructVariant = SerializeFields;

    fn serialize_bool(self, v: bool) -> Result<Repr> {
        Ok(Repr::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_i128(self, v: i128) -> Result<Repr> {
        Ok(Repr::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Repr> {
        Ok(Repr::Int(v.into()))
    }

    fn serialize_u128(self, v: u128) -> Result<Repr> {
        i128::try_from(v)
            .map(Repr::Int)
            .map_err(|_| Error::render(format!("integer {} is out of range", v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Repr> {
        Ok(Repr::Float(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<Repr> {
        Ok(Repr::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Repr> {
        Ok(Repr::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Repr> {
        Ok(Repr::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Repr> {
        Ok(Repr::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Repr> {
        Ok(Repr::None)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Repr> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Repr> {
        Ok(Repr::Tuple(Vec::new()))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Repr> {
        Ok(Repr::Symbol(name.to_string()))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Repr> {
        Ok(Repr::Symbol(format!("{}::{}", name, variant)))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Repr> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Repr> {
        Ok(Repr::Call {
            name: variant.to_string(),
            args: vec![to_repr(value)?],
        })
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeItems> {
        Ok(SerializeItems::new(ItemsKind::List, len))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeItems> {
        Ok(SerializeItems::new(ItemsKind::List, Some(len)))
    }

    fn serialize_tuple_struct(self, name: &'static str, len: usize) -> Result<SerializeItems> {
        Ok(SerializeItems::new(ItemsKind::Call(name.to_string()), Some(len)))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeItems> {
        Ok(SerializeItems::new(
            ItemsKind::Call(variant.to_string()),
            Some(len),
        ))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeEntries> {
        Ok(SerializeEntries {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeFields> {
        Ok(SerializeFields::new(name, len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeFields> {
        Ok(SerializeFields::new(variant, len))
    }
}

enum ItemsKind {
    List,
    Call(String),
}

/// Positional collector for sequences, tuples and tuple structs
pub struct SerializeItems {
    kind: ItemsKind,
    items: Vec<Repr>,
}

impl SerializeItems {
    fn new(kind: ItemsKind, len: Option<usize>) -> Self {
        Self {
            kind,
            items: Vec::with_capacity(len.unwrap_or(0)),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(to_repr(value)?);
        Ok(())
    }

    fn finish(self) -> Repr {
        match self.kind {
            ItemsKind::List => Repr::List(self.items),
            ItemsKind::Call(name) => Repr::Call {
                name,
                args: self.items,
            },
        }
    }
}

impl ser::SerializeSeq for SerializeItems {
    type Ok = Repr;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Repr> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeItems {
    type Ok = Repr;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Repr> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeItems {
    type Ok = Repr;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Repr> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeItems {
    type Ok = Repr;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Repr> {
        Ok(self.finish())
    }
}

/// Collector for maps; keys are kept in insertion order
pub struct SerializeEntries {
    entries: Vec<(Repr, Repr)>,
    pending_key: Option<Repr>,
}

impl ser::SerializeMap for SerializeEntries {
    type Ok = Repr;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.pending_key = Some(to_repr(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::render("map value serialized before its key"))?;
        self.entries.push((key, to_repr(value)?));
        Ok(())
    }

    fn end(self) -> Result<Repr> {
        Ok(Repr::Map(self.entries))
    }
}

/// Collector for structs and struct variants
pub struct SerializeFields {
    name: String,
    fields: Vec<(String, Repr)>,
}

impl SerializeFields {
    fn new(name: &str, len: usize) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::with_capacity(len),
        }
    }
}

impl ser::SerializeStruct for SerializeFields {
    type Ok = Repr;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.fields.push((key.to_string(), to_repr(value)?));
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<Repr> {
        Ok(Repr::Struct {
            name: self.name,
            fields: self.fields,
        })
    }
}

impl ser::SerializeStructVariant for SerializeFields {
    type Ok = Repr;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.fields.push((key.to_string(), to_repr(value)?));
        Ok(())
    }

    fn end(self) -> Result<Repr> {
        Ok(Repr::Struct {
            name: self.name,
            fields: self.fields,
        })
    }
}
