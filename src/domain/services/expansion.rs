//! Reference expansion as an explicit fetch-then-merge join.
//!
//! The store only ever hands back plain documents; these helpers collect the
//! referenced ids, load them in one batch and stitch them back in reference
//! order. References that no longer resolve are dropped from lists and
//! surface as `None` for single references.

use std::collections::{HashMap, HashSet};
use crate::domain::models::{
    destination::Destination,
    package::{Package, PackageView},
    booking::{Booking, BookingView},
};
use crate::domain::ports::{DestinationRepository, PackageRepository};
use crate::error::AppError;

pub async fn expand_package(
    destinations: &dyn DestinationRepository,
    package: Package,
) -> Result<PackageView, AppError> {
    let mut views = expand_packages(destinations, vec![package]).await?;
    Ok(views.remove(0))
}

pub async fn expand_packages(
    destinations: &dyn DestinationRepository,
    packages: Vec<Package>,
) -> Result<Vec<PackageView>, AppError> {
    let ids = distinct_ids(packages.iter().flat_map(|p| p.destinations.0.iter()));
    let fetched = index_by_id(destinations.find_many(&ids).await?, |d| &d.id);

    Ok(packages
        .into_iter()
        .map(|package| {
            let resolved = merge_in_order(&package.destinations.0, &fetched);
            package.with_destinations(resolved)
        })
        .collect())
}

pub async fn expand_booking(
    packages: &dyn PackageRepository,
    booking: Booking,
) -> Result<BookingView, AppError> {
    let package = packages.find_by_id(&booking.package_id).await?;
    Ok(booking.with_package(package))
}

pub async fn expand_bookings(
    packages: &dyn PackageRepository,
    bookings: Vec<Booking>,
) -> Result<Vec<BookingView>, AppError> {
    let ids = distinct_ids(bookings.iter().map(|b| &b.package_id));
    let fetched = index_by_id(packages.find_many(&ids).await?, |p| &p.id);

    Ok(bookings
        .into_iter()
        .map(|booking| {
            let package = fetched.get(&booking.package_id).cloned();
            booking.with_package(package)
        })
        .collect())
}

pub fn merge_in_order(references: &[String], fetched: &HashMap<String, Destination>) -> Vec<Destination> {
    references
        .iter()
        .filter_map(|id| fetched.get(id).cloned())
        .collect()
}

fn distinct_ids<'a>(ids: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert((*id).clone()))
        .cloned()
        .collect()
}

fn index_by_id<T>(docs: Vec<T>, id: impl Fn(&T) -> &String) -> HashMap<String, T> {
    docs.into_iter().map(|doc| (id(&doc).clone(), doc)).collect()
}
