use crate::nav::Value;

mod private {
	pub trait Sealed {}
	impl Sealed for usize {}
	impl Sealed for str {}
	impl Sealed for String {}
	impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// Navigation step accepted by [`Value::at`]: a mapping key or a sequence index.
///
/// Implemented for `usize`, `str`, `String` and references to those.
pub trait Index: private::Sealed {
	#[doc(hidden)]
	fn index_into<'a>(&self, value: &Value<'a>) -> Value<'a>;
}

impl Index for usize {
	fn index_into<'a>(&self, value: &Value<'a>) -> Value<'a> {
		value.to_arr().at(*self)
	}
}

impl Index for str {
	fn index_into<'a>(&self, value: &Value<'a>) -> Value<'a> {
		value.to_obj().at(self)
	}
}

impl Index for String {
	fn index_into<'a>(&self, value: &Value<'a>) -> Value<'a> {
		value.to_obj().at(self)
	}
}

impl<T> Index for &T
where
	T: ?Sized + Index,
{
	fn index_into<'a>(&self, value: &Value<'a>) -> Value<'a> {
		(**self).index_into(value)
	}
}
