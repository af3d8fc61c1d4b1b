// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Env var holding the public api key.
pub const TOKENIZATION_API_KEY: &str = "TOKENIZATION_API_KEY";
/// Env var holding the shared api secret.
pub const TOKENIZATION_API_SECRET: &str = "TOKENIZATION_API_SECRET";
/// Env var overriding the endpoint, see [`DEFAULT_ENDPOINT`].
pub const TOKENIZATION_ENDPOINT: &str = "TOKENIZATION_ENDPOINT";

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.bloxxon.co";

/// Authorization scheme name. Lower case on the wire; this is not RFC 7617 basic auth.
pub const AUTH_SCHEME: &str = "basic";
