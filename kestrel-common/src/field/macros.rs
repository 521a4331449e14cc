macro_rules! field_name {
    ($id:ident) => {
        stringify!($id)
    };
    ($id:ident, $name:literal) => {
        $name
    };
}

macro_rules! make_fields {
    ($($(#[$($attrss:tt)*])*($tag:literal, $id:ident, $ns:ident $(, $name:literal)?)),*$(,)?) => {
        $(
            $(#[$($attrss)*])*
            #[derive(Copy, Clone, Debug)]
            pub struct $id;

            impl $crate::exif::Field for $id {
                const NAME: &'static str = $crate::field::macros::field_name!($id $(, $name)?);
                const TAG: $crate::exif::TagId = $crate::exif::TagId($tag);
                const NAMESPACE: Namespace = Namespace::$ns;
            }
        )*

        pub(crate) static FIELDS: &[(u16, Namespace, &str)] = &[
            $(
                ($tag, Namespace::$ns, $crate::field::macros::field_name!($id $(, $name)?)),
            )*
        ];
    };
}

pub(crate) use {field_name, make_fields};
