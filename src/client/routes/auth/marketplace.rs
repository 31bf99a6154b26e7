use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{
            ConfirmModal, EmptyState, ErrorBanner, ImageUpload, LoadError, Loading, Page,
            PageHeader, SuccessModal, TextField,
        },
        error::ApiError,
        guard::Protected,
        query::{use_query, QueryState},
        store::session::use_session,
        util::{cart::Cart, format::format_money, load::load_marketplace},
    },
    model::{
        marketplace::{CatalogDto, CreateCatalogDto, ProductDto, ProductFormDto},
        user::Role,
    },
};

/// Roles that manage products and catalogues
const MANAGERS: [Role; 2] = [Role::SchoolAdmin, Role::Vendor];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub nombre: String,
    pub descripcion: String,
    pub precio: String,
    pub categoria: String,
    pub stock: String,
    pub imagen_url: Option<String>,
}

impl ProductDraft {
    pub fn edit(product: &ProductDto) -> Self {
        Self {
            id: Some(product.id.clone()),
            nombre: product.nombre.clone(),
            descripcion: product.descripcion.clone().unwrap_or_default(),
            precio: product.precio.to_string(),
            categoria: product.categoria.clone().unwrap_or_default(),
            stock: product.stock.map(|stock| stock.to_string()).unwrap_or_default(),
            imagen_url: product.imagen_url.clone(),
        }
    }

    pub fn validate(&self) -> Result<ProductFormDto, ApiError> {
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err(ApiError::Validation("El nombre del producto es obligatorio".to_string()));
        }

        let precio = self
            .precio
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| ApiError::Validation("Indica un precio válido".to_string()))?;

        let stock = match self.stock.trim() {
            "" => None,
            value => Some(value.parse::<u32>().map_err(|_| {
                ApiError::Validation("El stock debe ser un número entero".to_string())
            })?),
        };

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(ProductFormDto {
            nombre: nombre.to_string(),
            descripcion: optional(&self.descripcion),
            precio,
            categoria: optional(&self.categoria),
            stock,
            imagen_url: self.imagen_url.clone(),
        })
    }
}

#[component]
pub fn Marketplace() -> Element {
    rsx!(
        Title { "Marketplace | Chuflay" }
        Page { class: "flex flex-col items-center",
            Protected { roles: vec![Role::SchoolAdmin, Role::Parent, Role::Vendor],
                MarketplaceView {}
            }
        }
    )
}

#[component]
fn MarketplaceView() -> Element {
    let session = use_session();
    let can_manage = session
        .state
        .read()
        .role()
        .is_some_and(|role| role.is_allowed(&MANAGERS));
    let api = session.api();

    let mut view = use_query(|api| async move { load_marketplace(&api).await });
    let mut draft = use_signal(|| None::<ProductDraft>);
    let mut deleting = use_signal(|| None::<ProductDto>);
    let mut creating_catalog = use_signal(|| false);
    let mut cart = use_signal(Cart::default);
    let mut ordering = use_signal(|| false);
    let mut ordered = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let delete_api = api.clone();
    let confirm_delete = move |_: ()| {
        let api = delete_api.clone();

        async move {
            let Some(product) = deleting.take() else {
                return;
            };

            match api::marketplace::delete_product(&api, &product.id).await {
                Ok(_) => {
                    tracing::info!(product_id = %product.id, "Deleted product");
                    view.reload();
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    let place_order = move |_| {
        let api = api.clone();
        let order = cart.read().to_order();

        async move {
            ordering.set(true);
            error.set(None);

            match api::marketplace::create_order(&api, &order).await {
                Ok(created) => {
                    tracing::info!(order_id = %created.id, items = created.items.len(), "Placed order");
                    cart.set(Cart::default());
                    ordered.set(true);
                }
                Err(e) => error.set(Some(e.message())),
            }

            ordering.set(false);
        }
    };

    rsx!(
        div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
            PageHeader { title: "Marketplace",
                if can_manage {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| creating_catalog.set(true),
                        "Nuevo catálogo"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| draft.set(Some(ProductDraft::default())),
                        "Nuevo producto"
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }

            if let Some(current) = draft() {
                ProductEditor {
                    key: "{current.id:?}",
                    draft: current.clone(),
                    on_saved: move |_| {
                        draft.set(None);
                        view.reload();
                    },
                    on_cancel: move |_| draft.set(None),
                }
            }

            match view.state() {
                QueryState::Loading => rsx!(Loading {}),
                QueryState::Failed(e) => rsx!(LoadError { error: e }),
                QueryState::Ready(data) => {
                    let total = format_money(cart.read().total(&data.products));
                    let units = cart.read().units();

                    rsx!(
                        if creating_catalog() {
                            CatalogEditor {
                                products: data.products.clone(),
                                on_saved: move |_| {
                                    creating_catalog.set(false);
                                    view.reload();
                                },
                                on_cancel: move |_| creating_catalog.set(false),
                            }
                        }

                        if !can_manage && units > 0 {
                            div { class: "alert flex justify-between",
                                span { "{units} producto(s) en el carrito · {total}" }
                                button {
                                    class: "btn btn-primary btn-sm",
                                    disabled: ordering(),
                                    onclick: place_order,
                                    "Realizar pedido"
                                }
                            }
                        }

                        if data.products.is_empty() {
                            EmptyState { message: "No hay productos disponibles." }
                        } else {
                            div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-4",
                                for product in data.products.clone() {
                                    ProductCard {
                                        key: "{product.id}",
                                        quantity: cart.read().quantity(&product.id),
                                        product: product.clone(),
                                        can_manage,
                                        on_edit: move |product: ProductDto| draft.set(Some(ProductDraft::edit(&product))),
                                        on_delete: move |product| deleting.set(Some(product)),
                                        on_add: move |id: String| cart.write().add(&id),
                                        on_remove: move |id: String| cart.write().remove(&id),
                                    }
                                }
                            }
                        }

                        CatalogList { catalogs: data.catalogs.clone(), products: data.products.clone() }
                    )
                }
            }

            if let Some(product) = deleting() {
                ConfirmModal {
                    title: "Eliminar producto",
                    message: format!("¿Seguro que quieres eliminar \"{}\"?", product.nombre),
                    confirm_label: "Eliminar",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }

            if ordered() {
                SuccessModal {
                    title: "Pedido realizado",
                    message: "Tu pedido se ha registrado correctamente.",
                    on_close: move |_| ordered.set(false),
                }
            }
        }
    )
}

#[component]
fn ProductCard(
    product: ProductDto,
    quantity: u32,
    can_manage: bool,
    on_edit: EventHandler<ProductDto>,
    on_delete: EventHandler<ProductDto>,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let price = format_money(product.precio);
    let available = product.in_stock();
    let edited = product.clone();
    let deleted = product.clone();
    let added = product.id.clone();
    let removed = product.id.clone();

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            if let Some(url) = &product.imagen_url {
                figure {
                    img { class: "h-40 w-full object-cover", src: "{url}", alt: "{product.nombre}" }
                }
            }
            div { class: "card-body",
                h2 { class: "card-title", "{product.nombre}" }
                if let Some(category) = &product.categoria {
                    span { class: "badge badge-outline", "{category}" }
                }
                if let Some(description) = &product.descripcion {
                    p { class: "text-sm", "{description}" }
                }
                p { class: "font-semibold", "{price}" }
                if !available {
                    p { class: "text-sm text-error", "Agotado" }
                }
                div { class: "card-actions justify-end items-center",
                    if can_manage {
                        button {
                            class: "btn btn-sm btn-outline",
                            onclick: move |_| on_edit.call(edited.clone()),
                            "Editar"
                        }
                        button {
                            class: "btn btn-sm btn-error btn-outline",
                            onclick: move |_| on_delete.call(deleted.clone()),
                            "Eliminar"
                        }
                    } else {
                        if quantity > 0 {
                            button {
                                class: "btn btn-sm btn-ghost",
                                onclick: move |_| on_remove.call(removed.clone()),
                                "-"
                            }
                            span { "{quantity}" }
                        }
                        button {
                            class: "btn btn-sm btn-primary",
                            disabled: !available,
                            onclick: move |_| on_add.call(added.clone()),
                            "Añadir"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ProductEditor(draft: ProductDraft, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_session().api();
    let mut form = use_signal(|| draft.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let current = form.read().clone();

        async move {
            let product = match current.validate() {
                Ok(product) => product,
                Err(e) => {
                    error.set(Some(e.message()));
                    return;
                }
            };

            saving.set(true);
            error.set(None);

            let result = match &current.id {
                Some(id) => api::marketplace::update_product(&api, id, &product).await,
                None => api::marketplace::create_product(&api, &product).await,
            };

            saving.set(false);

            match result {
                Ok(saved) => {
                    tracing::info!(product_id = %saved.id, "Saved product");
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    let heading = if draft.id.is_some() {
        "Editar producto"
    } else {
        "Nuevo producto"
    };
    let current = form.read().clone();

    rsx!(
        div { class: "card bg-base-200 w-full",
            form { class: "card-body gap-3", onsubmit: onsubmit,
                h2 { class: "card-title", "{heading}" }
                TextField {
                    label: "Nombre",
                    value: current.nombre.clone(),
                    on_input: move |value| form.write().nombre = value,
                }
                TextField {
                    label: "Descripción",
                    value: current.descripcion.clone(),
                    on_input: move |value| form.write().descripcion = value,
                }
                div { class: "flex flex-wrap gap-2",
                    TextField {
                        label: "Precio",
                        value: current.precio.clone(),
                        on_input: move |value| form.write().precio = value,
                    }
                    TextField {
                        label: "Categoría",
                        value: current.categoria.clone(),
                        on_input: move |value| form.write().categoria = value,
                    }
                    TextField {
                        label: "Stock",
                        value: current.stock.clone(),
                        on_input: move |value| form.write().stock = value,
                    }
                }
                ImageUpload {
                    current: current.imagen_url.clone(),
                    on_uploaded: move |url| form.write().imagen_url = Some(url),
                }
                if let Some(message) = error() {
                    ErrorBanner { message, on_dismiss: move |_| error.set(None) }
                }
                div { class: "card-actions justify-end",
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        "Guardar"
                    }
                }
            }
        }
    )
}

#[component]
fn CatalogEditor(
    products: Vec<ProductDto>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_session().api();
    let mut nombre = use_signal(String::new);
    let mut descripcion = use_signal(String::new);
    let mut selected = use_signal(Vec::<String>::new);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        let description = descripcion.read().trim().to_string();
        let catalog = CreateCatalogDto {
            nombre: nombre.read().trim().to_string(),
            descripcion: (!description.is_empty()).then_some(description),
            productos: selected.read().clone(),
        };

        async move {
            if catalog.nombre.is_empty() {
                error.set(Some("El nombre del catálogo es obligatorio".to_string()));
                return;
            }

            match api::marketplace::create_catalog(&api, &catalog).await {
                Ok(created) => {
                    tracing::info!(catalog_id = %created.id, "Created catalog");
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    rsx!(
        div { class: "card bg-base-200 w-full",
            form { class: "card-body gap-3", onsubmit: onsubmit,
                h2 { class: "card-title", "Nuevo catálogo" }
                TextField {
                    label: "Nombre",
                    value: nombre(),
                    on_input: move |value| nombre.set(value),
                }
                TextField {
                    label: "Descripción",
                    value: descripcion(),
                    on_input: move |value| descripcion.set(value),
                }
                div { class: "flex flex-wrap gap-4",
                    for product in products {
                        {
                            let id = product.id.clone();
                            let checked = selected.read().contains(&id);

                            rsx!(
                                label { key: "{product.id}", class: "label cursor-pointer gap-2",
                                    input {
                                        r#type: "checkbox",
                                        class: "checkbox checkbox-sm",
                                        checked,
                                        onchange: move |_| {
                                            let mut ids = selected.write();
                                            if let Some(position) = ids.iter().position(|p| *p == id) {
                                                ids.remove(position);
                                            } else {
                                                ids.push(id.clone());
                                            }
                                        },
                                    }
                                    "{product.nombre}"
                                }
                            )
                        }
                    }
                }
                if let Some(message) = error() {
                    ErrorBanner { message, on_dismiss: move |_| error.set(None) }
                }
                div { class: "card-actions justify-end",
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Crear" }
                }
            }
        }
    )
}

#[component]
fn CatalogList(catalogs: Vec<CatalogDto>, products: Vec<ProductDto>) -> Element {
    if catalogs.is_empty() {
        return rsx!();
    }

    rsx!(
        section {
            h2 { class: "text-lg font-semibold mb-2", "Catálogos" }
            div { class: "grid gap-2 md:grid-cols-2",
                for catalog in catalogs {
                    {
                        let names: Vec<&str> = catalog
                            .productos
                            .iter()
                            .filter_map(|id| products.iter().find(|product| &product.id == id))
                            .map(|product| product.nombre.as_str())
                            .collect();
                        let names = names.join(", ");

                        rsx!(
                            div { key: "{catalog.id}", class: "card bg-base-200",
                                div { class: "card-body py-3",
                                    h3 { class: "font-semibold", "{catalog.nombre}" }
                                    if let Some(description) = &catalog.descripcion {
                                        p { class: "text-sm", "{description}" }
                                    }
                                    p { class: "text-sm opacity-70", "{names}" }
                                }
                            }
                        )
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::ProductDraft;

    #[test]
    /// Expect optional fields to be dropped when blank and numbers parsed
    fn test_product_draft_validate() {
        let draft = ProductDraft {
            nombre: "Cuaderno".to_string(),
            precio: "2,50".to_string(),
            stock: "10".to_string(),
            ..ProductDraft::default()
        };

        let product = draft.validate().unwrap();
        assert_eq!(product.precio, 2.5);
        assert_eq!(product.stock, Some(10));
        assert!(product.categoria.is_none());

        assert!(ProductDraft { precio: "gratis".to_string(), ..draft.clone() }.validate().is_err());
        assert!(ProductDraft { stock: "-1".to_string(), ..draft }.validate().is_err());
    }
}
