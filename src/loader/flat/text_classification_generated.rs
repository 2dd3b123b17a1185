// automatically generated by the FlatBuffers compiler, do not modify


// @generated

use core::mem;
use core::cmp::Ordering;

extern crate flatbuffers;
use self::flatbuffers::{EndianScalar, Follow};

#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_TRANSFORMATION_TYPE: u8 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_TRANSFORMATION_TYPE: u8 = 3;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_TRANSFORMATION_TYPE: [TransformationType; 4] = [
  TransformationType::NONE,
  TransformationType::SimpleTransformation,
  TransformationType::MappedTokenTransformation,
  TransformationType::HashedNGramsTransformation,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct TransformationType(pub u8);
#[allow(non_upper_case_globals)]
impl TransformationType {
  pub const NONE: Self = Self(0);
  pub const SimpleTransformation: Self = Self(1);
  pub const MappedTokenTransformation: Self = Self(2);
  pub const HashedNGramsTransformation: Self = Self(3);

  pub const ENUM_MIN: u8 = 0;
  pub const ENUM_MAX: u8 = 3;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::NONE,
    Self::SimpleTransformation,
    Self::MappedTokenTransformation,
    Self::HashedNGramsTransformation,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::NONE => Some("NONE"),
      Self::SimpleTransformation => Some("SimpleTransformation"),
      Self::MappedTokenTransformation => Some("MappedTokenTransformation"),
      Self::HashedNGramsTransformation => Some("HashedNGramsTransformation"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for TransformationType {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for TransformationType {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = flatbuffers::read_scalar_at::<u8>(buf, loc);
    Self(b)
  }
}

impl flatbuffers::Push for TransformationType {
    type Output = TransformationType;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        flatbuffers::emplace_scalar::<u8>(dst, self.0);
    }
}

impl flatbuffers::EndianScalar for TransformationType {
  type Scalar = u8;
  #[inline]
  fn to_little_endian(self) -> u8 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: u8) -> Self {
    let b = u8::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for TransformationType {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    u8::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for TransformationType {}
pub struct TransformationTypeUnionTableOffset {}

#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_CLASSIFIER: u8 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_CLASSIFIER: u8 = 2;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_CLASSIFIER: [Classifier; 3] = [
  Classifier::NONE,
  Classifier::LinearClassifier,
  Classifier::NeuralClassifier,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Classifier(pub u8);
#[allow(non_upper_case_globals)]
impl Classifier {
  pub const NONE: Self = Self(0);
  pub const LinearClassifier: Self = Self(1);
  pub const NeuralClassifier: Self = Self(2);

  pub const ENUM_MIN: u8 = 0;
  pub const ENUM_MAX: u8 = 2;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::NONE,
    Self::LinearClassifier,
    Self::NeuralClassifier,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::NONE => Some("NONE"),
      Self::LinearClassifier => Some("LinearClassifier"),
      Self::NeuralClassifier => Some("NeuralClassifier"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for Classifier {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for Classifier {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = flatbuffers::read_scalar_at::<u8>(buf, loc);
    Self(b)
  }
}

impl flatbuffers::Push for Classifier {
    type Output = Classifier;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        flatbuffers::emplace_scalar::<u8>(dst, self.0);
    }
}

impl flatbuffers::EndianScalar for Classifier {
  type Scalar = u8;
  #[inline]
  fn to_little_endian(self) -> u8 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: u8) -> Self {
    let b = u8::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for Classifier {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    u8::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for Classifier {}
pub struct ClassifierUnionTableOffset {}

pub enum SimpleTransformationOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct SimpleTransformation<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SimpleTransformation<'a> {
  type Inner = SimpleTransformation<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> SimpleTransformation<'a> {
  pub const VT_TRANSFORMATION_TYPE: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    SimpleTransformation { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args SimpleTransformationArgs<'args>
  ) -> flatbuffers::WIPOffset<SimpleTransformation<'bldr>> {
    let mut builder = SimpleTransformationBuilder::new(_fbb);
    if let Some(x) = args.transformation_type { builder.add_transformation_type(x); }
    builder.finish()
  }


  #[inline]
  pub fn transformation_type(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SimpleTransformation::VT_TRANSFORMATION_TYPE, None)}
  }
}

impl flatbuffers::Verifiable for SimpleTransformation<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("transformation_type", Self::VT_TRANSFORMATION_TYPE, false)?
     .finish();
    Ok(())
  }
}
pub struct SimpleTransformationArgs<'a> {
    pub transformation_type: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for SimpleTransformationArgs<'a> {
  #[inline]
  fn default() -> Self {
    SimpleTransformationArgs {
      transformation_type: None,
    }
  }
}

pub struct SimpleTransformationBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> SimpleTransformationBuilder<'a, 'b> {
  #[inline]
  pub fn add_transformation_type(&mut self, transformation_type: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SimpleTransformation::VT_TRANSFORMATION_TYPE, transformation_type);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> SimpleTransformationBuilder<'a, 'b> {
    let start = _fbb.start_table();
    SimpleTransformationBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<SimpleTransformation<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for SimpleTransformation<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("SimpleTransformation");
      ds.field("transformation_type", &self.transformation_type());
      ds.finish()
  }
}
pub enum CharCodeOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct CharCode<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for CharCode<'a> {
  type Inner = CharCode<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> CharCode<'a> {
  pub const VT_CHARACTER: flatbuffers::VOffsetT = 4;
  pub const VT_BITS: flatbuffers::VOffsetT = 6;
  pub const VT_LENGTH: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    CharCode { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args CharCodeArgs
  ) -> flatbuffers::WIPOffset<CharCode<'bldr>> {
    let mut builder = CharCodeBuilder::new(_fbb);
    builder.add_bits(args.bits);
    builder.add_character(args.character);
    builder.add_length(args.length);
    builder.finish()
  }


  #[inline]
  pub fn character(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(CharCode::VT_CHARACTER, Some(0)).unwrap()}
  }
  #[inline]
  pub fn bits(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(CharCode::VT_BITS, Some(0)).unwrap()}
  }
  #[inline]
  pub fn length(&self) -> u8 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u8>(CharCode::VT_LENGTH, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for CharCode<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<u32>("character", Self::VT_CHARACTER, false)?
     .visit_field::<u32>("bits", Self::VT_BITS, false)?
     .visit_field::<u8>("length", Self::VT_LENGTH, false)?
     .finish();
    Ok(())
  }
}
pub struct CharCodeArgs {
    pub character: u32,
    pub bits: u32,
    pub length: u8,
}
impl<'a> Default for CharCodeArgs {
  #[inline]
  fn default() -> Self {
    CharCodeArgs {
      character: 0,
      bits: 0,
      length: 0,
    }
  }
}

pub struct CharCodeBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> CharCodeBuilder<'a, 'b> {
  #[inline]
  pub fn add_character(&mut self, character: u32) {
    self.fbb_.push_slot::<u32>(CharCode::VT_CHARACTER, character, 0);
  }
  #[inline]
  pub fn add_bits(&mut self, bits: u32) {
    self.fbb_.push_slot::<u32>(CharCode::VT_BITS, bits, 0);
  }
  #[inline]
  pub fn add_length(&mut self, length: u8) {
    self.fbb_.push_slot::<u8>(CharCode::VT_LENGTH, length, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> CharCodeBuilder<'a, 'b> {
    let start = _fbb.start_table();
    CharCodeBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<CharCode<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for CharCode<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("CharCode");
      ds.field("character", &self.character());
      ds.field("bits", &self.bits());
      ds.field("length", &self.length());
      ds.finish()
  }
}
pub enum TokenCategoriesOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct TokenCategories<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for TokenCategories<'a> {
  type Inner = TokenCategories<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> TokenCategories<'a> {
  pub const VT_TOKEN: flatbuffers::VOffsetT = 4;
  pub const VT_CATEGORIES: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    TokenCategories { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args TokenCategoriesArgs<'args>
  ) -> flatbuffers::WIPOffset<TokenCategories<'bldr>> {
    let mut builder = TokenCategoriesBuilder::new(_fbb);
    if let Some(x) = args.categories { builder.add_categories(x); }
    if let Some(x) = args.token { builder.add_token(x); }
    builder.finish()
  }


  #[inline]
  pub fn token(&self) -> Option<flatbuffers::Vector<'a, u8>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(TokenCategories::VT_TOKEN, None)}
  }
  #[inline]
  pub fn categories(&self) -> Option<flatbuffers::Vector<'a, u32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u32>>>(TokenCategories::VT_CATEGORIES, None)}
  }
}

impl flatbuffers::Verifiable for TokenCategories<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>("token", Self::VT_TOKEN, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u32>>>("categories", Self::VT_CATEGORIES, false)?
     .finish();
    Ok(())
  }
}
pub struct TokenCategoriesArgs<'a> {
    pub token: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
    pub categories: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u32>>>,
}
impl<'a> Default for TokenCategoriesArgs<'a> {
  #[inline]
  fn default() -> Self {
    TokenCategoriesArgs {
      token: None,
      categories: None,
    }
  }
}

pub struct TokenCategoriesBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> TokenCategoriesBuilder<'a, 'b> {
  #[inline]
  pub fn add_token(&mut self, token: flatbuffers::WIPOffset<flatbuffers::Vector<'b , u8>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(TokenCategories::VT_TOKEN, token);
  }
  #[inline]
  pub fn add_categories(&mut self, categories: flatbuffers::WIPOffset<flatbuffers::Vector<'b , u32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(TokenCategories::VT_CATEGORIES, categories);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> TokenCategoriesBuilder<'a, 'b> {
    let start = _fbb.start_table();
    TokenCategoriesBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<TokenCategories<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for TokenCategories<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("TokenCategories");
      ds.field("token", &self.token());
      ds.field("categories", &self.categories());
      ds.finish()
  }
}
pub enum MappedTokenTransformationOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MappedTokenTransformation<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MappedTokenTransformation<'a> {
  type Inner = MappedTokenTransformation<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> MappedTokenTransformation<'a> {
  pub const VT_VECTOR_DIMENSION: flatbuffers::VOffsetT = 4;
  pub const VT_CODING: flatbuffers::VOffsetT = 6;
  pub const VT_MAPPING: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MappedTokenTransformation { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args MappedTokenTransformationArgs<'args>
  ) -> flatbuffers::WIPOffset<MappedTokenTransformation<'bldr>> {
    let mut builder = MappedTokenTransformationBuilder::new(_fbb);
    if let Some(x) = args.mapping { builder.add_mapping(x); }
    if let Some(x) = args.coding { builder.add_coding(x); }
    builder.add_vector_dimension(args.vector_dimension);
    builder.finish()
  }


  #[inline]
  pub fn vector_dimension(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(MappedTokenTransformation::VT_VECTOR_DIMENSION, Some(0)).unwrap()}
  }
  #[inline]
  pub fn coding(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<CharCode<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<CharCode>>>>(MappedTokenTransformation::VT_CODING, None)}
  }
  #[inline]
  pub fn mapping(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<TokenCategories<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<TokenCategories>>>>(MappedTokenTransformation::VT_MAPPING, None)}
  }
}

impl flatbuffers::Verifiable for MappedTokenTransformation<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<u32>("vector_dimension", Self::VT_VECTOR_DIMENSION, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<CharCode>>>>("coding", Self::VT_CODING, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<TokenCategories>>>>("mapping", Self::VT_MAPPING, false)?
     .finish();
    Ok(())
  }
}
pub struct MappedTokenTransformationArgs<'a> {
    pub vector_dimension: u32,
    pub coding: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<CharCode<'a>>>>>,
    pub mapping: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<TokenCategories<'a>>>>>,
}
impl<'a> Default for MappedTokenTransformationArgs<'a> {
  #[inline]
  fn default() -> Self {
    MappedTokenTransformationArgs {
      vector_dimension: 0,
      coding: None,
      mapping: None,
    }
  }
}

pub struct MappedTokenTransformationBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> MappedTokenTransformationBuilder<'a, 'b> {
  #[inline]
  pub fn add_vector_dimension(&mut self, vector_dimension: u32) {
    self.fbb_.push_slot::<u32>(MappedTokenTransformation::VT_VECTOR_DIMENSION, vector_dimension, 0);
  }
  #[inline]
  pub fn add_coding(&mut self, coding: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<CharCode<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MappedTokenTransformation::VT_CODING, coding);
  }
  #[inline]
  pub fn add_mapping(&mut self, mapping: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<TokenCategories<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MappedTokenTransformation::VT_MAPPING, mapping);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> MappedTokenTransformationBuilder<'a, 'b> {
    let start = _fbb.start_table();
    MappedTokenTransformationBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MappedTokenTransformation<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MappedTokenTransformation<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MappedTokenTransformation");
      ds.field("vector_dimension", &self.vector_dimension());
      ds.field("coding", &self.coding());
      ds.field("mapping", &self.mapping());
      ds.finish()
  }
}
pub enum HashedNGramsTransformationOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct HashedNGramsTransformation<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for HashedNGramsTransformation<'a> {
  type Inner = HashedNGramsTransformation<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> HashedNGramsTransformation<'a> {
  pub const VT_NUM_BUCKETS: flatbuffers::VOffsetT = 4;
  pub const VT_NGRAMS_RANGE: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    HashedNGramsTransformation { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args HashedNGramsTransformationArgs<'args>
  ) -> flatbuffers::WIPOffset<HashedNGramsTransformation<'bldr>> {
    let mut builder = HashedNGramsTransformationBuilder::new(_fbb);
    if let Some(x) = args.ngrams_range { builder.add_ngrams_range(x); }
    builder.add_num_buckets(args.num_buckets);
    builder.finish()
  }


  #[inline]
  pub fn num_buckets(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(HashedNGramsTransformation::VT_NUM_BUCKETS, Some(0)).unwrap()}
  }
  #[inline]
  pub fn ngrams_range(&self) -> Option<flatbuffers::Vector<'a, u32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u32>>>(HashedNGramsTransformation::VT_NGRAMS_RANGE, None)}
  }
}

impl flatbuffers::Verifiable for HashedNGramsTransformation<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<u32>("num_buckets", Self::VT_NUM_BUCKETS, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u32>>>("ngrams_range", Self::VT_NGRAMS_RANGE, false)?
     .finish();
    Ok(())
  }
}
pub struct HashedNGramsTransformationArgs<'a> {
    pub num_buckets: u32,
    pub ngrams_range: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u32>>>,
}
impl<'a> Default for HashedNGramsTransformationArgs<'a> {
  #[inline]
  fn default() -> Self {
    HashedNGramsTransformationArgs {
      num_buckets: 0,
      ngrams_range: None,
    }
  }
}

pub struct HashedNGramsTransformationBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> HashedNGramsTransformationBuilder<'a, 'b> {
  #[inline]
  pub fn add_num_buckets(&mut self, num_buckets: u32) {
    self.fbb_.push_slot::<u32>(HashedNGramsTransformation::VT_NUM_BUCKETS, num_buckets, 0);
  }
  #[inline]
  pub fn add_ngrams_range(&mut self, ngrams_range: flatbuffers::WIPOffset<flatbuffers::Vector<'b , u32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(HashedNGramsTransformation::VT_NGRAMS_RANGE, ngrams_range);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> HashedNGramsTransformationBuilder<'a, 'b> {
    let start = _fbb.start_table();
    HashedNGramsTransformationBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<HashedNGramsTransformation<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for HashedNGramsTransformation<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("HashedNGramsTransformation");
      ds.field("num_buckets", &self.num_buckets());
      ds.field("ngrams_range", &self.ngrams_range());
      ds.finish()
  }
}
pub enum TransformationOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Transformation<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Transformation<'a> {
  type Inner = Transformation<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Transformation<'a> {
  pub const VT_TRANSFORMATION_TYPE: flatbuffers::VOffsetT = 4;
  pub const VT_TRANSFORMATION: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Transformation { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args TransformationArgs
  ) -> flatbuffers::WIPOffset<Transformation<'bldr>> {
    let mut builder = TransformationBuilder::new(_fbb);
    if let Some(x) = args.transformation { builder.add_transformation(x); }
    builder.add_transformation_type(args.transformation_type);
    builder.finish()
  }


  #[inline]
  pub fn transformation_type(&self) -> TransformationType {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<TransformationType>(Transformation::VT_TRANSFORMATION_TYPE, Some(TransformationType::NONE)).unwrap()}
  }
  #[inline]
  pub fn transformation(&self) -> Option<flatbuffers::Table<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Table<'a>>>(Transformation::VT_TRANSFORMATION, None)}
  }
  #[inline]
  #[allow(non_snake_case)]
  pub fn transformation_as_simple_transformation(&self) -> Option<SimpleTransformation<'a>> {
    if self.transformation_type() == TransformationType::SimpleTransformation {
      self.transformation().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { SimpleTransformation::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn transformation_as_mapped_token_transformation(&self) -> Option<MappedTokenTransformation<'a>> {
    if self.transformation_type() == TransformationType::MappedTokenTransformation {
      self.transformation().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MappedTokenTransformation::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn transformation_as_hashed_ngrams_transformation(&self) -> Option<HashedNGramsTransformation<'a>> {
    if self.transformation_type() == TransformationType::HashedNGramsTransformation {
      self.transformation().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { HashedNGramsTransformation::init_from_table(t) }
     })
    } else {
      None
    }
  }

}

impl flatbuffers::Verifiable for Transformation<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_union::<TransformationType, _>("transformation_type", Self::VT_TRANSFORMATION_TYPE, "transformation", Self::VT_TRANSFORMATION, false, |key, v, pos| {
        match key {
          TransformationType::SimpleTransformation => v.verify_union_variant::<flatbuffers::ForwardsUOffset<SimpleTransformation>>("TransformationType::SimpleTransformation", pos),
          TransformationType::MappedTokenTransformation => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MappedTokenTransformation>>("TransformationType::MappedTokenTransformation", pos),
          TransformationType::HashedNGramsTransformation => v.verify_union_variant::<flatbuffers::ForwardsUOffset<HashedNGramsTransformation>>("TransformationType::HashedNGramsTransformation", pos),
          _ => Ok(()),
        }
     })?
     .finish();
    Ok(())
  }
}
pub struct TransformationArgs {
    pub transformation_type: TransformationType,
    pub transformation: Option<flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>>,
}
impl<'a> Default for TransformationArgs {
  #[inline]
  fn default() -> Self {
    TransformationArgs {
      transformation_type: TransformationType::NONE,
      transformation: None,
    }
  }
}

pub struct TransformationBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> TransformationBuilder<'a, 'b> {
  #[inline]
  pub fn add_transformation_type(&mut self, transformation_type: TransformationType) {
    self.fbb_.push_slot::<TransformationType>(Transformation::VT_TRANSFORMATION_TYPE, transformation_type, TransformationType::NONE);
  }
  #[inline]
  pub fn add_transformation(&mut self, transformation: flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Transformation::VT_TRANSFORMATION, transformation);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> TransformationBuilder<'a, 'b> {
    let start = _fbb.start_table();
    TransformationBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Transformation<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Transformation<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Transformation");
      ds.field("transformation_type", &self.transformation_type());
      match self.transformation_type() {
        TransformationType::SimpleTransformation => {
          if let Some(x) = self.transformation_as_simple_transformation() {
            ds.field("transformation", &x)
          } else {
            ds.field("transformation", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        TransformationType::MappedTokenTransformation => {
          if let Some(x) = self.transformation_as_mapped_token_transformation() {
            ds.field("transformation", &x)
          } else {
            ds.field("transformation", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        TransformationType::HashedNGramsTransformation => {
          if let Some(x) = self.transformation_as_hashed_ngrams_transformation() {
            ds.field("transformation", &x)
          } else {
            ds.field("transformation", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        _ => {
          let x: Option<()> = None;
          ds.field("transformation", &x)
        },
      };
      ds.finish()
  }
}
pub enum WeightVectorOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct WeightVector<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for WeightVector<'a> {
  type Inner = WeightVector<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> WeightVector<'a> {
  pub const VT_VALUES: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    WeightVector { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args WeightVectorArgs<'args>
  ) -> flatbuffers::WIPOffset<WeightVector<'bldr>> {
    let mut builder = WeightVectorBuilder::new(_fbb);
    if let Some(x) = args.values { builder.add_values(x); }
    builder.finish()
  }


  #[inline]
  pub fn values(&self) -> Option<flatbuffers::Vector<'a, f32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f32>>>(WeightVector::VT_VALUES, None)}
  }
}

impl flatbuffers::Verifiable for WeightVector<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>("values", Self::VT_VALUES, false)?
     .finish();
    Ok(())
  }
}
pub struct WeightVectorArgs<'a> {
    pub values: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
}
impl<'a> Default for WeightVectorArgs<'a> {
  #[inline]
  fn default() -> Self {
    WeightVectorArgs {
      values: None,
    }
  }
}

pub struct WeightVectorBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> WeightVectorBuilder<'a, 'b> {
  #[inline]
  pub fn add_values(&mut self, values: flatbuffers::WIPOffset<flatbuffers::Vector<'b , f32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(WeightVector::VT_VALUES, values);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> WeightVectorBuilder<'a, 'b> {
    let start = _fbb.start_table();
    WeightVectorBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<WeightVector<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for WeightVector<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("WeightVector");
      ds.field("values", &self.values());
      ds.finish()
  }
}
pub enum LinearClassifierOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct LinearClassifier<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for LinearClassifier<'a> {
  type Inner = LinearClassifier<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> LinearClassifier<'a> {
  pub const VT_CLASSES: flatbuffers::VOffsetT = 4;
  pub const VT_WEIGHTS: flatbuffers::VOffsetT = 6;
  pub const VT_BIASES: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    LinearClassifier { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args LinearClassifierArgs<'args>
  ) -> flatbuffers::WIPOffset<LinearClassifier<'bldr>> {
    let mut builder = LinearClassifierBuilder::new(_fbb);
    if let Some(x) = args.biases { builder.add_biases(x); }
    if let Some(x) = args.weights { builder.add_weights(x); }
    if let Some(x) = args.classes { builder.add_classes(x); }
    builder.finish()
  }


  #[inline]
  pub fn classes(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>(LinearClassifier::VT_CLASSES, None)}
  }
  #[inline]
  pub fn weights(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<WeightVector<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<WeightVector>>>>(LinearClassifier::VT_WEIGHTS, None)}
  }
  #[inline]
  pub fn biases(&self) -> Option<flatbuffers::Vector<'a, f32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f32>>>(LinearClassifier::VT_BIASES, None)}
  }
}

impl flatbuffers::Verifiable for LinearClassifier<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&'_ str>>>>("classes", Self::VT_CLASSES, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<WeightVector>>>>("weights", Self::VT_WEIGHTS, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>("biases", Self::VT_BIASES, false)?
     .finish();
    Ok(())
  }
}
pub struct LinearClassifierArgs<'a> {
    pub classes: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>,
    pub weights: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<WeightVector<'a>>>>>,
    pub biases: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
}
impl<'a> Default for LinearClassifierArgs<'a> {
  #[inline]
  fn default() -> Self {
    LinearClassifierArgs {
      classes: None,
      weights: None,
      biases: None,
    }
  }
}

pub struct LinearClassifierBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> LinearClassifierBuilder<'a, 'b> {
  #[inline]
  pub fn add_classes(&mut self, classes: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<&'b  str>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(LinearClassifier::VT_CLASSES, classes);
  }
  #[inline]
  pub fn add_weights(&mut self, weights: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<WeightVector<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(LinearClassifier::VT_WEIGHTS, weights);
  }
  #[inline]
  pub fn add_biases(&mut self, biases: flatbuffers::WIPOffset<flatbuffers::Vector<'b , f32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(LinearClassifier::VT_BIASES, biases);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> LinearClassifierBuilder<'a, 'b> {
    let start = _fbb.start_table();
    LinearClassifierBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<LinearClassifier<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for LinearClassifier<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("LinearClassifier");
      ds.field("classes", &self.classes());
      ds.field("weights", &self.weights());
      ds.field("biases", &self.biases());
      ds.finish()
  }
}
pub enum LayerOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Layer<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Layer<'a> {
  type Inner = Layer<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Layer<'a> {
  pub const VT_ROWS: flatbuffers::VOffsetT = 4;
  pub const VT_ACTIVATION: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Layer { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args LayerArgs<'args>
  ) -> flatbuffers::WIPOffset<Layer<'bldr>> {
    let mut builder = LayerBuilder::new(_fbb);
    if let Some(x) = args.activation { builder.add_activation(x); }
    if let Some(x) = args.rows { builder.add_rows(x); }
    builder.finish()
  }


  #[inline]
  pub fn rows(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<WeightVector<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<WeightVector>>>>(Layer::VT_ROWS, None)}
  }
  #[inline]
  pub fn activation(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Layer::VT_ACTIVATION, None)}
  }
}

impl flatbuffers::Verifiable for Layer<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<WeightVector>>>>("rows", Self::VT_ROWS, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("activation", Self::VT_ACTIVATION, false)?
     .finish();
    Ok(())
  }
}
pub struct LayerArgs<'a> {
    pub rows: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<WeightVector<'a>>>>>,
    pub activation: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for LayerArgs<'a> {
  #[inline]
  fn default() -> Self {
    LayerArgs {
      rows: None,
      activation: None,
    }
  }
}

pub struct LayerBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> LayerBuilder<'a, 'b> {
  #[inline]
  pub fn add_rows(&mut self, rows: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<WeightVector<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Layer::VT_ROWS, rows);
  }
  #[inline]
  pub fn add_activation(&mut self, activation: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Layer::VT_ACTIVATION, activation);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> LayerBuilder<'a, 'b> {
    let start = _fbb.start_table();
    LayerBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Layer<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Layer<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Layer");
      ds.field("rows", &self.rows());
      ds.field("activation", &self.activation());
      ds.finish()
  }
}
pub enum NeuralClassifierOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct NeuralClassifier<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for NeuralClassifier<'a> {
  type Inner = NeuralClassifier<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> NeuralClassifier<'a> {
  pub const VT_CLASSES: flatbuffers::VOffsetT = 4;
  pub const VT_LAYERS: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    NeuralClassifier { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args NeuralClassifierArgs<'args>
  ) -> flatbuffers::WIPOffset<NeuralClassifier<'bldr>> {
    let mut builder = NeuralClassifierBuilder::new(_fbb);
    if let Some(x) = args.layers { builder.add_layers(x); }
    if let Some(x) = args.classes { builder.add_classes(x); }
    builder.finish()
  }


  #[inline]
  pub fn classes(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>(NeuralClassifier::VT_CLASSES, None)}
  }
  #[inline]
  pub fn layers(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Layer<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Layer>>>>(NeuralClassifier::VT_LAYERS, None)}
  }
}

impl flatbuffers::Verifiable for NeuralClassifier<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&'_ str>>>>("classes", Self::VT_CLASSES, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Layer>>>>("layers", Self::VT_LAYERS, false)?
     .finish();
    Ok(())
  }
}
pub struct NeuralClassifierArgs<'a> {
    pub classes: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>,
    pub layers: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Layer<'a>>>>>,
}
impl<'a> Default for NeuralClassifierArgs<'a> {
  #[inline]
  fn default() -> Self {
    NeuralClassifierArgs {
      classes: None,
      layers: None,
    }
  }
}

pub struct NeuralClassifierBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> NeuralClassifierBuilder<'a, 'b> {
  #[inline]
  pub fn add_classes(&mut self, classes: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<&'b  str>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(NeuralClassifier::VT_CLASSES, classes);
  }
  #[inline]
  pub fn add_layers(&mut self, layers: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<Layer<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(NeuralClassifier::VT_LAYERS, layers);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> NeuralClassifierBuilder<'a, 'b> {
    let start = _fbb.start_table();
    NeuralClassifierBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<NeuralClassifier<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for NeuralClassifier<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("NeuralClassifier");
      ds.field("classes", &self.classes());
      ds.field("layers", &self.layers());
      ds.finish()
  }
}
pub enum ModelOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Model<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Model<'a> {
  type Inner = Model<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Model<'a> {
  pub const VT_VERSION: flatbuffers::VOffsetT = 4;
  pub const VT_TIMESTAMP: flatbuffers::VOffsetT = 6;
  pub const VT_LOCALE: flatbuffers::VOffsetT = 8;
  pub const VT_TRANSFORMATIONS: flatbuffers::VOffsetT = 10;
  pub const VT_CLASSIFIER_TYPE: flatbuffers::VOffsetT = 12;
  pub const VT_CLASSIFIER: flatbuffers::VOffsetT = 14;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Model { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args ModelArgs<'args>
  ) -> flatbuffers::WIPOffset<Model<'bldr>> {
    let mut builder = ModelBuilder::new(_fbb);
    if let Some(x) = args.classifier { builder.add_classifier(x); }
    if let Some(x) = args.transformations { builder.add_transformations(x); }
    if let Some(x) = args.locale { builder.add_locale(x); }
    if let Some(x) = args.timestamp { builder.add_timestamp(x); }
    builder.add_version(args.version);
    builder.add_classifier_type(args.classifier_type);
    builder.finish()
  }


  #[inline]
  pub fn version(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(Model::VT_VERSION, Some(0)).unwrap()}
  }
  #[inline]
  pub fn timestamp(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Model::VT_TIMESTAMP, None)}
  }
  #[inline]
  pub fn locale(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Model::VT_LOCALE, None)}
  }
  #[inline]
  pub fn transformations(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Transformation<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Transformation>>>>(Model::VT_TRANSFORMATIONS, None)}
  }
  #[inline]
  pub fn classifier_type(&self) -> Classifier {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<Classifier>(Model::VT_CLASSIFIER_TYPE, Some(Classifier::NONE)).unwrap()}
  }
  #[inline]
  pub fn classifier(&self) -> Option<flatbuffers::Table<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Table<'a>>>(Model::VT_CLASSIFIER, None)}
  }
  #[inline]
  #[allow(non_snake_case)]
  pub fn classifier_as_linear_classifier(&self) -> Option<LinearClassifier<'a>> {
    if self.classifier_type() == Classifier::LinearClassifier {
      self.classifier().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { LinearClassifier::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn classifier_as_neural_classifier(&self) -> Option<NeuralClassifier<'a>> {
    if self.classifier_type() == Classifier::NeuralClassifier {
      self.classifier().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { NeuralClassifier::init_from_table(t) }
     })
    } else {
      None
    }
  }

}

impl flatbuffers::Verifiable for Model<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<u32>("version", Self::VT_VERSION, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("timestamp", Self::VT_TIMESTAMP, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("locale", Self::VT_LOCALE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Transformation>>>>("transformations", Self::VT_TRANSFORMATIONS, false)?
     .visit_union::<Classifier, _>("classifier_type", Self::VT_CLASSIFIER_TYPE, "classifier", Self::VT_CLASSIFIER, false, |key, v, pos| {
        match key {
          Classifier::LinearClassifier => v.verify_union_variant::<flatbuffers::ForwardsUOffset<LinearClassifier>>("Classifier::LinearClassifier", pos),
          Classifier::NeuralClassifier => v.verify_union_variant::<flatbuffers::ForwardsUOffset<NeuralClassifier>>("Classifier::NeuralClassifier", pos),
          _ => Ok(()),
        }
     })?
     .finish();
    Ok(())
  }
}
pub struct ModelArgs<'a> {
    pub version: u32,
    pub timestamp: Option<flatbuffers::WIPOffset<&'a str>>,
    pub locale: Option<flatbuffers::WIPOffset<&'a str>>,
    pub transformations: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Transformation<'a>>>>>,
    pub classifier_type: Classifier,
    pub classifier: Option<flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>>,
}
impl<'a> Default for ModelArgs<'a> {
  #[inline]
  fn default() -> Self {
    ModelArgs {
      version: 0,
      timestamp: None,
      locale: None,
      transformations: None,
      classifier_type: Classifier::NONE,
      classifier: None,
    }
  }
}

pub struct ModelBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> ModelBuilder<'a, 'b> {
  #[inline]
  pub fn add_version(&mut self, version: u32) {
    self.fbb_.push_slot::<u32>(Model::VT_VERSION, version, 0);
  }
  #[inline]
  pub fn add_timestamp(&mut self, timestamp: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Model::VT_TIMESTAMP, timestamp);
  }
  #[inline]
  pub fn add_locale(&mut self, locale: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Model::VT_LOCALE, locale);
  }
  #[inline]
  pub fn add_transformations(&mut self, transformations: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<Transformation<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Model::VT_TRANSFORMATIONS, transformations);
  }
  #[inline]
  pub fn add_classifier_type(&mut self, classifier_type: Classifier) {
    self.fbb_.push_slot::<Classifier>(Model::VT_CLASSIFIER_TYPE, classifier_type, Classifier::NONE);
  }
  #[inline]
  pub fn add_classifier(&mut self, classifier: flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Model::VT_CLASSIFIER, classifier);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> ModelBuilder<'a, 'b> {
    let start = _fbb.start_table();
    ModelBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Model<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Model<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Model");
      ds.field("version", &self.version());
      ds.field("timestamp", &self.timestamp());
      ds.field("locale", &self.locale());
      ds.field("transformations", &self.transformations());
      ds.field("classifier_type", &self.classifier_type());
      match self.classifier_type() {
        Classifier::LinearClassifier => {
          if let Some(x) = self.classifier_as_linear_classifier() {
            ds.field("classifier", &x)
          } else {
            ds.field("classifier", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        Classifier::NeuralClassifier => {
          if let Some(x) = self.classifier_as_neural_classifier() {
            ds.field("classifier", &x)
          } else {
            ds.field("classifier", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        _ => {
          let x: Option<()> = None;
          ds.field("classifier", &x)
        },
      };
      ds.finish()
  }
}
#[inline]
/// Verifies that a buffer of bytes contains a `Model`
/// and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_model_unchecked`.
pub fn root_as_model(buf: &[u8]) -> Result<Model, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root::<Model>(buf)
}
#[inline]
/// Verifies, with the given options, that a buffer of bytes
/// contains a `Model` and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_model_unchecked`.
pub fn root_as_model_with_opts<'b, 'o>(
  opts: &'o flatbuffers::VerifierOptions,
  buf: &'b [u8],
) -> Result<Model<'b>, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root_with_opts::<Model<'b>>(opts, buf)
}
#[inline]
/// Assumes, without verification, that a buffer of bytes contains a Model and returns it.
/// # Safety
/// Callers must trust the given bytes do indeed contain a valid `Model`.
pub unsafe fn root_as_model_unchecked(buf: &[u8]) -> Model {
  flatbuffers::root_unchecked::<Model>(buf)
}
pub const MODEL_IDENTIFIER: &str = "TCLM";

#[inline]
pub fn model_buffer_has_identifier(buf: &[u8]) -> bool {
  flatbuffers::buffer_has_identifier(buf, MODEL_IDENTIFIER, false)
}

#[inline]
pub fn finish_model_buffer<'a, 'b>(
    fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>,
    root: flatbuffers::WIPOffset<Model<'a>>) {
  fbb.finish(root, Some(MODEL_IDENTIFIER));
}
