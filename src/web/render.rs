use tera::{Context, Tera};
use crate::domain::models::{
    destination::Destination, package::PackageView, blog::Blog, comment::Comment, booking::BookingView,
};
use crate::error::AppError;
use crate::web::admin::{AdminDestinationsView, BookingRow, CommentRow, DashboardStats};
use crate::web::views::{BlogCard, CommentItem, DestinationCard, PackageCard};

const TEMPLATES: &[(&str, &str)] = &[
    ("site/destination_cards.html", include_str!("../../templates/site/destination_cards.html")),
    ("site/package_cards.html", include_str!("../../templates/site/package_cards.html")),
    ("site/blog_cards.html", include_str!("../../templates/site/blog_cards.html")),
    ("site/comments.html", include_str!("../../templates/site/comments.html")),
    ("site/contact_ack.html", include_str!("../../templates/site/contact_ack.html")),
    ("site/load_failed.html", include_str!("../../templates/site/load_failed.html")),
    ("admin/dashboard.html", include_str!("../../templates/admin/dashboard.html")),
    ("admin/destinations.html", include_str!("../../templates/admin/destinations.html")),
    ("admin/comments.html", include_str!("../../templates/admin/comments.html")),
    ("admin/bookings.html", include_str!("../../templates/admin/bookings.html")),
];

/// Every template name ends in `.html`, so Tera escapes all interpolations.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    Ok(tera)
}

pub fn destination_cards(tera: &Tera, destinations: &[Destination]) -> Result<String, AppError> {
    let cards: Vec<DestinationCard> = destinations.iter().map(DestinationCard::from).collect();
    let mut ctx = Context::new();
    ctx.insert("cards", &cards);
    Ok(tera.render("site/destination_cards.html", &ctx)?)
}

pub fn package_cards(tera: &Tera, packages: &[PackageView]) -> Result<String, AppError> {
    let cards: Vec<PackageCard> = packages.iter().map(PackageCard::from).collect();
    let mut ctx = Context::new();
    ctx.insert("cards", &cards);
    Ok(tera.render("site/package_cards.html", &ctx)?)
}

pub fn blog_cards(tera: &Tera, posts: &[Blog]) -> Result<String, AppError> {
    let cards: Vec<BlogCard> = posts.iter().map(BlogCard::from).collect();
    let mut ctx = Context::new();
    ctx.insert("cards", &cards);
    Ok(tera.render("site/blog_cards.html", &ctx)?)
}

pub fn comment_list(tera: &Tera, comments: &[Comment]) -> Result<String, AppError> {
    let items: Vec<CommentItem> = comments.iter().map(CommentItem::from).collect();
    let mut ctx = Context::new();
    ctx.insert("comments", &items);
    Ok(tera.render("site/comments.html", &ctx)?)
}

pub fn contact_ack(tera: &Tera, name: &str) -> Result<String, AppError> {
    let mut ctx = Context::new();
    ctx.insert("name", name);
    Ok(tera.render("site/contact_ack.html", &ctx)?)
}

/// `what` is the plural noun shown to the visitor, e.g. "destinations".
pub fn load_failed(tera: &Tera, what: &str) -> Result<String, AppError> {
    let mut ctx = Context::new();
    ctx.insert("what", what);
    Ok(tera.render("site/load_failed.html", &ctx)?)
}

pub fn admin_dashboard(tera: &Tera, stats: &DashboardStats) -> Result<String, AppError> {
    let mut ctx = Context::new();
    ctx.insert("stats", stats);
    Ok(tera.render("admin/dashboard.html", &ctx)?)
}

pub fn admin_destinations(tera: &Tera, view: &AdminDestinationsView) -> Result<String, AppError> {
    let ctx = Context::from_serialize(view.panel())?;
    Ok(tera.render("admin/destinations.html", &ctx)?)
}

pub fn admin_comments(tera: &Tera, comments: &[Comment]) -> Result<String, AppError> {
    let rows: Vec<CommentRow> = comments.iter().map(CommentRow::from).collect();
    let mut ctx = Context::new();
    ctx.insert("rows", &rows);
    Ok(tera.render("admin/comments.html", &ctx)?)
}

pub fn admin_bookings(tera: &Tera, bookings: &[BookingView]) -> Result<String, AppError> {
    let rows: Vec<BookingRow> = bookings.iter().map(BookingRow::from).collect();
    let mut ctx = Context::new();
    ctx.insert("rows", &rows);
    Ok(tera.render("admin/bookings.html", &ctx)?)
}
