//! Conversion seams between external representations and domain types.

use keel_types::Outcome;

/// Fallible conversion from a source representation (a DTO or persistence
/// model) into a target.
///
/// Implementations typically track one outcome per target field in a
/// [`FieldStates`](crate::FieldStates), check it, then assemble the target.
pub trait Mapper<Source> {
    type Target;
    type Error;

    fn map(&self, source: Source) -> Outcome<Self::Target, Self::Error>;
}

/// Infallible two-way translation used by persistence adapters.
pub trait DomainMapper<Domain, Persistence> {
    fn to_domain(&self, target: &Persistence) -> Domain;

    fn to_persistence(&self, target: &Domain) -> Persistence;
}

/// Resolves a concrete [`Mapper`] and applies it.
///
/// The provided [`map`](MapperFactory::map) forwards the mapper's outcome
/// unchanged.
pub trait MapperFactory<Source> {
    type Mapper: Mapper<Source>;

    fn create(&self) -> Self::Mapper;

    fn map(
        &self,
        source: Source,
    ) -> Outcome<<Self::Mapper as Mapper<Source>>::Target, <Self::Mapper as Mapper<Source>>::Error>
    {
        self.create().map(source)
    }
}
