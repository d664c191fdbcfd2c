use std::io::Write;
use std::path::{Path, PathBuf};

use bigdecimal::BigDecimal;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::application::ProductService;
use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::{LookupRepository, ProductRepository};
use crate::domain::product::ProductInput;
use crate::errors::AppError;
use crate::images::PreparedImage;
use crate::infrastructure::{DieselLookupRepository, DieselProductRepository};
use crate::view::criteria::{selection, ALL_SENTINEL};
use crate::view::{filter_products, present_product, Capability, ProductCriteria, ProductDisplay, Sort};

use super::{render, resolve, Context};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// Browse the catalog
    List(ListProductsArgs),
    Add(AddProductArgs),
    /// Overwrite a product identified by its article
    Update(UpdateProductArgs),
    Delete(DeleteProductArgs),
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Text matched against name, article, description and brand
    #[arg(long, default_value = "")]
    query: String,

    #[arg(long, default_value = ALL_SENTINEL)]
    supplier: String,

    #[arg(long, default_value = ALL_SENTINEL)]
    category: String,

    /// quantity-asc, quantity-desc, price-asc, price-desc, discount-asc, discount-desc or none
    #[arg(long, default_value = "none")]
    sort: String,
}

impl ListProductsArgs {
    fn criteria(&self) -> Result<ProductCriteria, DomainError> {
        Ok(ProductCriteria {
            query: self.query.trim().to_string(),
            supplier: selection(&self.supplier),
            category: selection(&self.category),
            sort: Sort::parse_option(&self.sort)?,
        })
    }
}

/// Product fields; reference selections are given by name.
#[derive(Debug, Args)]
struct ProductForm {
    #[arg(long)]
    name: String,

    #[arg(long)]
    category: String,

    #[arg(long)]
    brand: String,

    #[arg(long)]
    supplier: String,

    #[arg(long)]
    price: BigDecimal,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    quantity: i32,

    /// Discount in percent, 0 to 100
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    discount: i32,

    #[arg(long, default_value = "")]
    description: String,

    /// Image file copied into the image directory
    #[arg(long)]
    image: Option<PathBuf>,
}

impl ProductForm {
    fn into_input(
        self,
        article: &str,
        image_path: Option<String>,
        lookups: &impl LookupRepository,
    ) -> Result<ProductInput, DomainError> {
        Ok(ProductInput {
            article: article.to_string(),
            name: self.name,
            category_id: resolve(&lookups.categories()?, &self.category),
            brand_id: resolve(&lookups.brands()?, &self.brand),
            supplier_id: resolve(&lookups.suppliers()?, &self.supplier),
            price: self.price,
            quantity: self.quantity,
            discount_percent: self.discount,
            description: self.description,
            image_path,
        })
    }
}

#[derive(Debug, Args)]
struct AddProductArgs {
    #[arg(long)]
    article: String,

    #[command(flatten)]
    form: ProductForm,
}

#[derive(Debug, Args)]
struct UpdateProductArgs {
    article: String,

    #[command(flatten)]
    form: ProductForm,
}

#[derive(Debug, Args)]
struct DeleteProductArgs {
    article: String,
}

pub(crate) fn run(
    ctx: &Context,
    pool: &DbPool,
    command: ProductsCommand,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let service = ProductService::new(DieselProductRepository::new(pool.clone()));
    let lookups = DieselLookupRepository::new(pool.clone());

    match command.command {
        ProductsSubcommand::List(args) => list(ctx, &service, args, out),
        ProductsSubcommand::Add(args) => add(ctx, &service, &lookups, args, out),
        ProductsSubcommand::Update(args) => update(ctx, &service, &lookups, args, out),
        ProductsSubcommand::Delete(args) => delete(ctx, &service, args, out),
    }
}

/// An image decoded, scaled and given its final path, but not yet written.
struct StagedImage {
    prepared: PreparedImage,
    target: PathBuf,
}

impl StagedImage {
    fn stored_path(&self) -> String {
        self.target.to_string_lossy().into_owned()
    }
}

fn stage_image(
    ctx: &Context,
    source: Option<&Path>,
    article: &str,
) -> Result<Option<StagedImage>, AppError> {
    let Some(source) = source else {
        return Ok(None);
    };
    let prepared = ctx.images.prepare(source)?;
    let target = ctx.images.target_path(article)?;
    Ok(Some(StagedImage { prepared, target }))
}

fn list<R: ProductRepository>(
    ctx: &Context,
    service: &ProductService<R>,
    args: ListProductsArgs,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let criteria = args.criteria()?;
    if !criteria.is_unfiltered() {
        ctx.require(Capability::Filter)?;
    }

    let schema = ctx.session.role.view_schema();
    let products = service.list_products()?;
    let rows: Vec<ProductDisplay> = filter_products(&products, &criteria)
        .into_iter()
        .map(|p| present_product(p, schema))
        .collect();

    if ctx.json {
        return ctx.write_json(out, &rows);
    }
    render::write_session(out, &ctx.session)?;
    render::write_products(out, schema, &rows)?;
    writeln!(out, "{} of {} products", rows.len(), products.len())?;
    Ok(())
}

/// Everything that can reject the command runs before the insert; the image
/// file is written only once the row exists.
fn add<R: ProductRepository>(
    ctx: &Context,
    service: &ProductService<R>,
    lookups: &impl LookupRepository,
    args: AddProductArgs,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    ctx.require(Capability::ManageProducts)?;

    let article = args.article.trim().to_string();
    let staged = stage_image(ctx, args.form.image.as_deref(), &article)?;
    let mut image_path = staged.as_ref().map(StagedImage::stored_path);
    let input = args.form.into_input(&article, image_path.clone(), lookups)?;
    let id = service.create_product(input.clone())?;

    let mut image_error = None;
    if let Some(staged) = staged {
        if let Err(e) = ctx.images.write(&staged.prepared, &staged.target) {
            log::warn!("product {article} saved without its image: {e}");
            service.update_product(
                &article,
                ProductInput {
                    image_path: None,
                    ..input
                },
            )?;
            image_path = None;
            image_error = Some(e.to_string());
        }
    }

    if ctx.json {
        return ctx.write_json(
            out,
            &json!({
                "id": id,
                "article": article,
                "image_path": image_path,
                "image_error": image_error,
            }),
        );
    }
    match image_error {
        Some(e) => writeln!(out, "Product {article} created without an image: {e}")?,
        None => writeln!(out, "Product {article} created")?,
    }
    Ok(())
}

fn update<R: ProductRepository>(
    ctx: &Context,
    service: &ProductService<R>,
    lookups: &impl LookupRepository,
    args: UpdateProductArgs,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    ctx.require(Capability::ManageProducts)?;

    let existing = service.get_product(args.article.trim())?;
    let article = existing.article.clone();
    let staged = stage_image(ctx, args.form.image.as_deref(), &article)?;
    let mut image_path = match &staged {
        Some(staged) => Some(staged.stored_path()),
        None => existing.image_path.clone(),
    };
    let input = args.form.into_input(&article, image_path.clone(), lookups)?;
    service.update_product(&article, input.clone())?;

    let mut image_error = None;
    if let Some(staged) = staged {
        match ctx.images.write(&staged.prepared, &staged.target) {
            Ok(()) => {
                if let Some(old) = &existing.image_path {
                    if image_path.as_ref() != Some(old) {
                        ctx.images.remove(old);
                    }
                }
            }
            Err(e) => {
                log::warn!("product {article} kept its previous image: {e}");
                service.update_product(
                    &article,
                    ProductInput {
                        image_path: existing.image_path.clone(),
                        ..input
                    },
                )?;
                image_path = existing.image_path.clone();
                image_error = Some(e.to_string());
            }
        }
    }

    if ctx.json {
        return ctx.write_json(
            out,
            &json!({
                "article": article,
                "image_path": image_path,
                "image_error": image_error,
            }),
        );
    }
    match image_error {
        Some(e) => writeln!(out, "Product {article} updated, image not replaced: {e}")?,
        None => writeln!(out, "Product {article} updated")?,
    }
    Ok(())
}

fn delete<R: ProductRepository>(
    ctx: &Context,
    service: &ProductService<R>,
    args: DeleteProductArgs,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    ctx.require(Capability::ManageProducts)?;

    let removed = service.delete_product(args.article.trim())?;
    if let Some(path) = &removed.image_path {
        ctx.images.remove(path);
    }

    if ctx.json {
        return ctx.write_json(out, &json!({ "deleted": removed.article }));
    }
    writeln!(out, "Product {} deleted", removed.article)?;
    Ok(())
}
