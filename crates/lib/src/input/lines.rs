use crate::input::IStr;

/// Iterator over the lines of an [IStr].
pub struct Lines<'p, 'a> {
    input: &'p mut IStr<'a>,
}

impl<'p, 'a> Lines<'p, 'a> {
    pub(crate) fn new(input: &'p mut IStr<'a>) -> Self {
        Self { input }
    }
}

impl<'a> Iterator for Lines<'_, 'a> {
    type Item = IStr<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_line()
    }
}
