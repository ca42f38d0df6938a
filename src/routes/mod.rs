pub mod athletes;
pub mod health;
pub mod meets;
pub mod results;

use axum::response::Html;

// Index handler (simple, keep here)
pub async fn index() -> Html<&'static str> {
    Html(
        "<h1>Cross Country Stats API</h1><p>Endpoints:</p><ul>\
         <li><a href='/api/health'>/api/health</a></li>\
         <li><a href='/api/hello'>/api/hello</a></li>\
         <li><a href='/api/athletes'>/api/athletes</a></li>\
         <li><a href='/api/meets'>/api/meets</a></li>\
         <li><a href='/api/results'>/api/results</a></li>\
         </ul>",
    )
}
