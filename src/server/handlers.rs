use crate::{
    error::GenError,
    models::{
        AudioGenerationRequest, ChartRequest, ImageGenerationRequest, ImageListing,
        VideoGenerationRequest, WelcomeResponse,
    },
    server::state::AppState,
    storage::ImageFolder,
};
use actix_files::NamedFile;
use actix_web::{
    dev::Payload,
    http::header::{HeaderName, HeaderValue},
    web, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use serde::de::DeserializeOwned;
use std::{future::Future, pin::Pin};

/// Response header carrying the stored file name of a rendered chart.
pub const CHART_NAME_HEADER: &str = "x-chart-name";

/// Generation parameters: the JSON body when the request declares a JSON
/// content type, the query string otherwise. Extraction errors come from the
/// source that was actually read.
pub struct Params<T>(pub T);

impl<T> Params<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_json(req: &HttpRequest) -> bool {
    req.content_type().ends_with("json")
}

impl<T: DeserializeOwned + 'static> FromRequest for Params<T> {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_json(req) {
            let json = web::Json::<T>::from_request(req, payload);
            Box::pin(async move { Ok(Params(json.await?.into_inner())) })
        } else {
            let query = web::Query::<T>::from_request(req, payload);
            Box::pin(async move { Ok(Params(query.await?.into_inner())) })
        }
    }
}

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse::default())
}

pub async fn asset_image(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<NamedFile, GenError> {
    serve_image(&state, ImageFolder::Asset, &name).await
}

pub async fn background_image(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<NamedFile, GenError> {
    serve_image(&state, ImageFolder::Background, &name).await
}

async fn serve_image(
    state: &AppState,
    folder: ImageFolder,
    name: &str,
) -> Result<NamedFile, GenError> {
    let path = state.assets.image_path(folder, name).await?;
    Ok(NamedFile::open_async(path).await?)
}

pub async fn list_images(state: web::Data<AppState>) -> Result<HttpResponse, GenError> {
    let images = state.assets.list().await?;
    Ok(HttpResponse::Ok().json(ImageListing { images }))
}

pub async fn generate_image(
    state: web::Data<AppState>,
    request: Params<ImageGenerationRequest>,
) -> Result<HttpResponse, GenError> {
    let image = state.fal.image().generate(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(image))
}

pub async fn generate_video(
    state: web::Data<AppState>,
    request: Params<VideoGenerationRequest>,
) -> Result<HttpResponse, GenError> {
    let video = state.fal.video().generate(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(video))
}

pub async fn generate_audio(
    state: web::Data<AppState>,
    request: Params<AudioGenerationRequest>,
) -> Result<HttpResponse, GenError> {
    let audio = state.fal.audio().generate(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(audio))
}

pub async fn get_chart(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<NamedFile, GenError> {
    let path = state.charts.store().resolve(&name).await?;
    Ok(NamedFile::open_async(path).await?)
}

/// Renders the chart and answers with the PNG itself.
pub async fn report_chart(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<ChartRequest>,
) -> Result<HttpResponse, GenError> {
    let charts = state.charts.clone();
    let request = body.into_inner();

    let artifact = web::block(move || charts.report(&request))
        .await
        .map_err(|e| GenError::InternalError(e.to_string()))??;
    log::info!("📊 Chart saved as {}", artifact.name);

    let file = NamedFile::open_async(&artifact.path).await?;
    let mut response = file.into_response(&req);
    let value = HeaderValue::from_str(&artifact.name)
        .map_err(|e| GenError::InternalError(e.to_string()))?;
    response
        .headers_mut()
        .insert(HeaderName::from_static(CHART_NAME_HEADER), value);

    Ok(response)
}
