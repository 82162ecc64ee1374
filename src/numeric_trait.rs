/// Scalar types accepted where a binary value is expected.
pub trait BaseVariable: Copy {
    fn to_f64(&self) -> f64;

    /// True when the value is exactly 0 or 1.
    fn is_binary(&self) -> bool {
        let value = self.to_f64();
        value == 0.0 || value == 1.0
    }

    /// 1 for a value of exactly one, 0 for anything else.
    fn to_bit(&self) -> usize {
        usize::from(self.to_f64() == 1.0)
    }
}

impl BaseVariable for usize {
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn is_binary(&self) -> bool {
        *self <= 1
    }
}

impl BaseVariable for u8 {
    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    fn is_binary(&self) -> bool {
        *self <= 1
    }
}

impl BaseVariable for i32 {
    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    fn is_binary(&self) -> bool {
        *self == 0 || *self == 1
    }
}

impl BaseVariable for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }
}
