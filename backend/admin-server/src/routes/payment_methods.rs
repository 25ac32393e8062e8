use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use domain_types::{
    admin_models::{
        PaymentMethodListModel, PaymentMethodRestrictionModel, PaymentMethodSearchModel,
        PaymentMethodsModel,
    },
    utils::required,
};
use shared_metrics::track_model_build;

use crate::{
    routes::{error::HttpError, state::AppState},
    utils::parse_optional_json,
};

pub async fn methods(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PaymentMethodsModel>, HttpError> {
    let methods_model = required(
        parse_optional_json::<PaymentMethodsModel>(&body)?,
        "methodsModel",
    )?;

    let methods_model = track_model_build("payment_methods", || {
        state
            .payment_model_factory
            .prepare_payment_methods_model(methods_model)
    })?;

    Ok(Json(methods_model))
}

pub async fn search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PaymentMethodSearchModel>, HttpError> {
    let search_model = required(
        parse_optional_json::<PaymentMethodSearchModel>(&body)?,
        "searchModel",
    )?;

    Ok(Json(
        state
            .payment_model_factory
            .prepare_payment_method_search_model(search_model),
    ))
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PaymentMethodListModel>, HttpError> {
    let search_model = required(
        parse_optional_json::<PaymentMethodSearchModel>(&body)?,
        "searchModel",
    )?;
    let work_context = state.work_context(&headers);

    let list_model = track_model_build("payment_method_list", || {
        state
            .payment_model_factory
            .prepare_payment_method_list_model(&search_model, &work_context)
    })?;

    Ok(Json(list_model))
}

pub async fn restrictions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PaymentMethodRestrictionModel>, HttpError> {
    let model = required(
        parse_optional_json::<PaymentMethodRestrictionModel>(&body)?,
        "model",
    )?;

    let model = track_model_build("payment_method_restriction", || {
        state
            .payment_model_factory
            .prepare_payment_method_restriction_model(model)
    })?;

    Ok(Json(model))
}
