pub mod company_route;
pub mod kununu_route;
