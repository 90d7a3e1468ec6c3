pub mod auth;
pub mod conversations;
pub mod gigs;
pub mod messages;
pub mod orders;
pub mod reviews;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (register/login are public, /me requires a session) ──
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(auth::register))
            .route("/login", web::post().to(auth::login))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Gig routes (listing and detail are public) ──
    cfg.service(
        web::scope("/gigs")
            .route("", web::get().to(gigs::get_gigs))
            .route("", web::post().to(gigs::create_gig))
            .route("/{id}", web::get().to(gigs::get_gig))
            .route("/{id}", web::delete().to(gigs::delete_gig)),
    );

    // ── Order routes (confirmation is keyed by the payment reference) ──
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(orders::get_orders))
            .route("", web::put().to(orders::confirm_order))
            .route(
                "/create-payment-intent/{gig_id}",
                web::post().to(orders::create_payment_intent),
            ),
    );

    // ── Review routes (listing is public, creation is buyer-only) ──
    cfg.service(
        web::scope("/reviews")
            .route("", web::post().to(reviews::create_review))
            .route("/{gig_id}", web::get().to(reviews::get_reviews)),
    );

    // ── Conversation routes (all require a session) ──
    cfg.service(
        web::scope("/conversations")
            .route("", web::get().to(conversations::get_conversations))
            .route("", web::post().to(conversations::create_conversation))
            .route(
                "/{id}/read",
                web::put().to(conversations::mark_conversation_read),
            ),
    );

    // ── Message routes (all require a session) ──
    cfg.service(
        web::scope("/messages")
            .route("", web::post().to(messages::create_message))
            .route(
                "/{conversation_id}",
                web::get().to(messages::get_messages),
            ),
    );
}
