kestrel_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Storage type of a tag value
    pub enum DataType {
        Byte = 1,
        Ascii = 2,
        Short = 3,
        Long = 4,
        Rational = 5,
        SByte = 6,
        Undefined = 7,
        SShort = 8,
        SLong = 9,
        SRational = 10,
        Float = 11,
        Double = 12,
    }
);

impl DataType {
    /// Size of one component in bytes
    ///
    /// Unknown types are treated as opaque bytes.
    pub fn size(self) -> u32 {
        match self {
            Self::Byte | Self::Ascii | Self::SByte | Self::Undefined | Self::Unknown(_) => 1,
            Self::Short | Self::SShort => 2,
            Self::Long | Self::SLong | Self::Float => 4,
            Self::Rational | Self::SRational | Self::Double => 8,
        }
    }

    pub fn category(self) -> TypeCategory {
        match self {
            Self::Byte | Self::Short | Self::Long | Self::SByte | Self::SShort | Self::SLong => {
                TypeCategory::Int
            }
            Self::Rational | Self::SRational => TypeCategory::Rational,
            Self::Float | Self::Double => TypeCategory::Float,
            Self::Ascii => TypeCategory::String,
            Self::Undefined => TypeCategory::Undefined,
            Self::Unknown(_) => TypeCategory::Other,
        }
    }

    pub fn u16(self) -> u16 {
        self.into()
    }
}

/// Accessor family of a [`DataType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Int,
    Float,
    Rational,
    String,
    Undefined,
    Other,
}

impl std::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Rational => "rational",
            Self::String => "string",
            Self::Undefined => "undefined",
            Self::Other => "other",
        })
    }
}
