//! Default templates compiled into the binary.

macro_rules! page {
    ($title:literal, $body:literal) => {
        concat!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>",
            $title,
            "</title>\n",
            "    <style>\n",
            "        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f7f7f8; color: #1f2933; margin: 0; }\n",
            "        main { max-width: 480px; margin: 80px auto; background: #fff; padding: 32px; border-radius: 8px; border: 1px solid #e4e7eb; }\n",
            "        h1 { font-size: 22px; margin: 0 0 16px; }\n",
            "        nav a { margin-right: 12px; color: #4f46e5; }\n",
            "        .error { color: #b91c1c; }\n",
            "    </style>\n",
            "</head>\n<body>\n<main>\n",
            $body,
            "\n<nav><a href=\"/\">Home</a><a href=\"/time\">Time</a><a href=\"/logout\">Log out</a></nav>\n</main>\n</body>\n</html>\n"
        )
    };
}

const INDEX: &str = page!("Welcome", "<h1>Hello, {{name}}!</h1>\n<p>Good to see you again.</p>");

const LOGIN: &str = page!(
    "Log in",
    "<h1>Who are you?</h1>\n<p class=\"error\">{{error}}</p>\n<form method=\"post\" action=\"/login\">\n    <input type=\"text\" name=\"name\" placeholder=\"First Last\" autofocus>\n    <button type=\"submit\">Log in</button>\n</form>"
);

const LOGOUT: &str = page!(
    "Logged out",
    "<h1>You are logged out.</h1>\n<p><a href=\"/login\">Log in again</a></p>"
);

const TIME: &str = page!(
    "Time",
    "<h1>Hi, {{display_name}}.</h1>\n<p>The time is now <strong>{{local_time}}</strong> ({{utc_time}}).</p>"
);

const HTTP404: &str = page!(
    "Not found",
    "<h1>404</h1>\n<p>There is nothing at this address.</p>"
);

const ERROR: &str = page!("Error", "<h1>{{status}}</h1>\n<p>{{message}}</p>");

/// (name, source) pairs for every built-in template.
pub(super) const TEMPLATES: &[(&str, &str)] = &[
    ("index", INDEX),
    ("login", LOGIN),
    ("logout", LOGOUT),
    ("time", TIME),
    ("http404", HTTP404),
    ("error", ERROR),
];
