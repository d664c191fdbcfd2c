use std::io::Write;

use clap::{Args, ValueEnum};

use crate::domain::ports::LookupRepository;
use crate::domain::product::Reference;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::infrastructure::DieselLookupRepository;
use crate::view::Capability;

use super::{render, Context};

#[derive(Debug, Args)]
pub(crate) struct LookupsArgs {
    kind: LookupKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LookupKind {
    Categories,
    Brands,
    Suppliers,
    PickupPoints,
    Clients,
}

impl LookupKind {
    /// Catalog references feed the filters; pickup points and clients only the order forms.
    fn capability(self) -> Capability {
        match self {
            LookupKind::Categories | LookupKind::Brands | LookupKind::Suppliers => {
                Capability::Filter
            }
            LookupKind::PickupPoints | LookupKind::Clients => Capability::ManageOrders,
        }
    }

    fn load(self, repo: &impl LookupRepository) -> Result<Vec<Reference>, AppError> {
        let references = match self {
            LookupKind::Categories => repo.categories(),
            LookupKind::Brands => repo.brands(),
            LookupKind::Suppliers => repo.suppliers(),
            LookupKind::PickupPoints => repo.pickup_points(),
            LookupKind::Clients => repo.clients(),
        }?;
        Ok(references)
    }
}

pub(crate) fn run(
    ctx: &Context,
    pool: &DbPool,
    args: LookupsArgs,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    ctx.require(args.kind.capability())?;

    let references = args
        .kind
        .load(&DieselLookupRepository::new(pool.clone()))?;

    if ctx.json {
        return ctx.write_json(out, &references);
    }
    render::write_references(out, &references)?;
    Ok(())
}
