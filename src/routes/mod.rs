use crate::utils::webutils::{validate_admin_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod join;
pub mod manuscript;
pub mod task;
pub mod team;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));

    // Join routes are public: the invitation token is the credential.
    cfg.service(
        web::scope("/join")
            .service(join::lookup::lookup)
            .service(join::accept::register)
            .service(join::accept::login),
    );

    cfg.service(
        web::scope("/team")
            .service(
                web::scope("/create")
                    .service(team::create::create_team)
                    .wrap(admin_auth),
            )
            .service(
                web::scope("")
                    .service(team::invite::create_invite)
                    .service(team::invite::list_invites)
                    .service(team::invite::revoke_invite)
                    .service(team::members::members)
                    .service(team::deactivate::deactivate)
                    .wrap(user_auth.clone()),
            ),
    );

    cfg.service(
        web::scope("/task")
            .service(task::create::create)
            .service(task::list::list)
            .service(task::update::update)
            .service(task::delete::delete)
            .wrap(user_auth.clone()),
    );

    cfg.service(
        web::scope("/manuscript")
            .service(manuscript::create::create)
            .service(manuscript::board::board)
            .service(manuscript::update::update)
            .service(manuscript::delete::delete)
            .wrap(user_auth),
    );
}
